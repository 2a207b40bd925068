// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound custom events.

use alloc::string::String;

/// A synthetic event dispatched on a bound element.
///
/// Two name families exist: pass-through names relayed verbatim from a
/// server event, and derived lifecycle names (`show-<id>` / `hide-<id>`)
/// synthesized from an open/closed transition. Both are plain
/// `CustomEvent`s; the receiving side cannot and need not tell them apart.
///
/// Events carry no detail payload. The `bubbles` flag is kept explicit so
/// sinks can forward it to a real event system without special cases, but
/// everything this bridge produces comes from [`CustomEvent::bubbling`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEvent {
    /// The event name.
    pub name: String,
    /// Whether the event propagates to ancestor listeners.
    pub bubbles: bool,
}

impl CustomEvent {
    /// Creates a bubbling event with the given name.
    #[must_use]
    pub fn bubbling(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bubbles: true,
        }
    }
}
