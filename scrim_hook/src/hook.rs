// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-element hook: lifecycle diffing and server-event relay.

use alloc::string::String;

use scrim_event::{CustomEvent, ServerEvent};
use scrim_timing::OneShotQueue;
use scrim_visibility::{VisibilityState, is_open_attr};

use crate::element::HookElement;

/// Delay between receiving a `redirect_to` option and the navigation
/// becoming due, in milliseconds.
pub const REDIRECT_DELAY_MS: u64 = 100;

/// Configuration for one hook instance.
///
/// The defaults match the attribute contract: the identifier lives in `id`,
/// the open/closed flag in `show`, and redirects fire after
/// [`REDIRECT_DELAY_MS`]. Hosts whose templates use prefixed attribute
/// names can rebind them here without touching the behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookConfig {
    /// Attribute holding the element identifier used in lifecycle names.
    pub id_attr: &'static str,
    /// Attribute holding the open/closed flag (`"true"` means open).
    pub show_attr: &'static str,
    /// Delay before a scheduled redirect becomes due, in milliseconds.
    pub redirect_delay_ms: u64,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            id_attr: "id",
            show_attr: "show",
            redirect_delay_ms: REDIRECT_DELAY_MS,
        }
    }
}

/// A deferred navigation scheduled by a `redirect_to` option.
///
/// The hook only schedules these; the host pops due redirects from the
/// queue and applies the target to its real location. There is no
/// cancellation path and no error path. If several redirects overlap, the
/// last one the host executes wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// The navigation target (a URL or path).
    pub target: String,
}

/// The event bridge for one bound element.
///
/// Holds the hook configuration and the last-known-open flag; nothing else.
/// The element itself is handed in on every call, and scheduled redirects
/// go into a caller-owned queue, so dropping the hook is a complete detach
/// with nothing further to tear down.
#[derive(Debug, Clone)]
pub struct ModalHook {
    config: HookConfig,
    visibility: VisibilityState,
}

impl ModalHook {
    /// Attaches to an element with the default configuration.
    ///
    /// Reads the element's current flag attribute to seed the last-known
    /// state. Nothing is dispatched at attach time.
    #[must_use]
    pub fn mounted<E: HookElement>(element: &E) -> Self {
        Self::mounted_with(HookConfig::default(), element)
    }

    /// Attaches to an element with an explicit configuration.
    #[must_use]
    pub fn mounted_with<E: HookElement>(config: HookConfig, element: &E) -> Self {
        let open = is_open_attr(element.attribute(config.show_attr));
        Self {
            config,
            visibility: VisibilityState::new(open),
        }
    }

    /// Returns this hook's configuration.
    #[must_use]
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Returns the last-known-open flag.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Handles an attribute refresh.
    ///
    /// Reads the flag attribute and diffs it against the last-known value.
    /// On an actual change, dispatches the lifecycle event (`show-<id>` or
    /// `hide-<id>`) on the element; otherwise dispatches nothing. A missing
    /// identifier degrades to an empty name suffix.
    pub fn updated<E: HookElement>(&mut self, element: &mut E) {
        let open = is_open_attr(element.attribute(self.config.show_attr));
        let Some(transition) = self.visibility.update(open) else {
            return;
        };
        let name = transition.event_name(element.attribute(self.config.id_attr).unwrap_or(""));
        element.dispatch(CustomEvent::bubbling(name));
    }

    /// Handles an inbound server event.
    ///
    /// The event name is re-dispatched verbatim as a bubbling custom event.
    /// A present, non-empty `redirect_to` option schedules a [`Redirect`]
    /// into `redirects`, due `redirect_delay_ms` after `now_ms`. The relay
    /// happens immediately either way; only the navigation is deferred.
    pub fn on_server_event<E: HookElement>(
        &self,
        element: &mut E,
        event: &ServerEvent,
        now_ms: u64,
        redirects: &mut OneShotQueue<Redirect>,
    ) {
        element.dispatch(CustomEvent::bubbling(event.name.clone()));
        if let Some(target) = event.opts.redirect_target() {
            redirects.schedule_after(
                now_ms,
                self.config.redirect_delay_ms,
                Redirect {
                    target: String::from(target),
                },
            );
        }
    }
}
