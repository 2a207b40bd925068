// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inbound server events and their options payload.

use alloc::string::String;

/// The fixed channel name hosts subscribe under to receive modal events.
///
/// The bridge itself never reads this constant; it exists so hosts and the
/// server side agree on one name without coupling to each other.
pub const MODAL_EVENT_CHANNEL: &str = "modal_event";

/// An inbound named event pushed by the server.
///
/// A `ServerEvent` is a name plus an options mapping. The name is relayed
/// verbatim as a bubbling custom event on the bound element; the options
/// carry at most one recognized key ([`EventOpts::redirect_to`]).
///
/// The shape is permissive by contract: a payload with no `event` field
/// decodes to an empty name, and the bridge dispatches the degenerately
/// named event rather than erroring. Callers are responsible for supplying
/// well-formed events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ServerEvent {
    /// The event name, relayed verbatim to the bound element.
    #[cfg_attr(feature = "serde", serde(default, rename = "event"))]
    pub name: String,
    /// The options payload. Missing on the wire is treated as empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub opts: EventOpts,
}

impl ServerEvent {
    /// Creates an event with the given name and empty options.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opts: EventOpts::default(),
        }
    }

    /// Creates an event carrying a `redirect_to` navigation target.
    #[must_use]
    pub fn with_redirect(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opts: EventOpts {
                redirect_to: Some(target.into()),
            },
        }
    }
}

/// Options attached to a [`ServerEvent`].
///
/// Exactly one key is recognized: `redirect_to`, a navigation target the
/// host applies after a short fixed delay. Unrecognized keys on the wire
/// are ignored during decoding; they are never surfaced here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct EventOpts {
    /// Navigation target to apply after the redirect delay, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub redirect_to: Option<String>,
}

impl EventOpts {
    /// Returns the navigation target, if one is present and non-empty.
    ///
    /// An empty string is treated as "no redirect": there is nowhere
    /// meaningful to navigate, so the bridge ignores it.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_to.as_deref().filter(|target| !target.is_empty())
    }

    /// Returns `true` if no recognized option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.redirect_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_event_has_empty_opts() {
        let event = ServerEvent::named("open-settings");
        assert_eq!(event.name, "open-settings");
        assert!(event.opts.is_empty());
        assert_eq!(event.opts.redirect_target(), None);
    }

    #[test]
    fn with_redirect_sets_target() {
        let event = ServerEvent::with_redirect("saved", "/dashboard");
        assert_eq!(event.name, "saved");
        assert_eq!(event.opts.redirect_target(), Some("/dashboard"));
        assert!(!event.opts.is_empty());
    }

    #[test]
    fn empty_redirect_target_is_ignored() {
        let opts = EventOpts {
            redirect_to: Some(String::new()),
        };
        assert_eq!(opts.redirect_target(), None);
        // The raw field still reports the value; only the accessor filters.
        assert!(!opts.is_empty());
    }

    #[test]
    fn default_event_is_degenerate_not_invalid() {
        let event = ServerEvent::default();
        assert_eq!(event.name, "");
        assert!(event.opts.is_empty());
    }

    #[cfg(feature = "serde")]
    mod decode {
        use super::*;
        use alloc::string::ToString;

        #[test]
        fn full_payload() {
            let event: ServerEvent = serde_json::from_str(
                r#"{"event": "saved", "opts": {"redirect_to": "/next"}}"#,
            )
            .unwrap();
            assert_eq!(event.name, "saved");
            assert_eq!(event.opts.redirect_target(), Some("/next"));
        }

        #[test]
        fn missing_fields_default() {
            let event: ServerEvent = serde_json::from_str("{}").unwrap();
            assert_eq!(event.name, "");
            assert!(event.opts.is_empty());

            let event: ServerEvent =
                serde_json::from_str(r#"{"event": "ping"}"#).unwrap();
            assert_eq!(event.name, "ping");
            assert!(event.opts.is_empty());
        }

        #[test]
        fn unknown_opt_keys_are_ignored() {
            let event: ServerEvent = serde_json::from_str(
                r#"{"event": "saved", "opts": {"redirect_to": "/x", "animate": true}}"#,
            )
            .unwrap();
            assert_eq!(event.opts.redirect_to, Some("/x".to_string()));
        }
    }
}
