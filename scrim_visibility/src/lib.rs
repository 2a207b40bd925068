// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrim Visibility: open/closed state tracking for a bound element.
//!
//! A bound element's flag attribute mutates outside the bridge's control;
//! the bridge only hears "the attributes may have changed". This crate holds
//! the one piece of derived state that makes those notifications useful: the
//! last-known-open flag. Feed the freshly read attribute value into
//! [`VisibilityState::update`] on every refresh and it reports at most one
//! [`Transition`] per actual change. A refresh that reports the same value
//! again is a no-op, so lifecycle events never double-fire.
//!
//! ## Usage
//!
//! 1) At attach time, read the element's flag attribute and build the state
//!    with [`VisibilityState::new`]. No transition is reported for the
//!    initial value.
//! 2) On each refresh, read the attribute again, convert it with
//!    [`is_open_attr`], and call [`VisibilityState::update`].
//! 3) When a transition is reported, name the lifecycle event with
//!    [`Transition::event_name`] and dispatch it.
//!
//! ## Minimal example
//!
//! ```
//! use scrim_visibility::{is_open_attr, Transition, VisibilityState};
//!
//! // Element attaches with `show="false"`.
//! let mut visibility = VisibilityState::new(is_open_attr(Some("false")));
//! assert!(!visibility.is_open());
//!
//! // Refresh with no change: nothing to emit.
//! assert_eq!(visibility.update(is_open_attr(Some("false"))), None);
//!
//! // Flag flips to "true": exactly one transition.
//! let transition = visibility.update(is_open_attr(Some("true"))).unwrap();
//! assert_eq!(transition, Transition::Opened);
//! assert_eq!(transition.event_name("m1"), "show-m1");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;

/// The flag attribute value that denotes an open element.
///
/// Any other value, including an absent attribute, denotes closed.
pub const OPEN_SENTINEL: &str = "true";

/// Name prefix for the lifecycle event emitted on a closed→open transition.
pub const SHOW_PREFIX: &str = "show-";

/// Name prefix for the lifecycle event emitted on an open→closed transition.
pub const HIDE_PREFIX: &str = "hide-";

/// Converts a raw flag attribute value into the open/closed flag.
///
/// Only the exact sentinel [`OPEN_SENTINEL`] means open; `"TRUE"`, `""`,
/// and a missing attribute all mean closed.
#[must_use]
pub fn is_open_attr(value: Option<&str>) -> bool {
    value == Some(OPEN_SENTINEL)
}

/// Tracks the last-known-open flag of one bound element.
///
/// Exactly one instance exists per attached behavior; instances share
/// nothing. The flag is mutated only by [`update`](Self::update), so the
/// invariant "one transition reported per observed change" holds for any
/// sequence of refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState {
    last_open: bool,
}

impl VisibilityState {
    /// Creates the state from the flag value observed at attach time.
    ///
    /// The initial value is recorded silently; no transition is reported
    /// until a later refresh actually changes it.
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { last_open: open }
    }

    /// Returns the last-known-open flag.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.last_open
    }

    /// Feeds a freshly observed flag value, returning the transition if the
    /// value changed.
    ///
    /// Self-transitions return `None`. This guard is what keeps a refresh
    /// storm from re-firing lifecycle events for an unchanged attribute.
    pub fn update(&mut self, open: bool) -> Option<Transition> {
        if open == self.last_open {
            return None;
        }
        self.last_open = open;
        Some(if open {
            Transition::Opened
        } else {
            Transition::Closed
        })
    }
}

/// A single observed change of the open/closed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The flag changed from closed to open.
    Opened,
    /// The flag changed from open to closed.
    Closed,
}

impl Transition {
    /// Builds the lifecycle event name for this transition and element id.
    ///
    /// A missing identifier degrades to an empty suffix (`"show-"`), never
    /// an error; downstream listeners ignore names they do not know.
    #[must_use]
    pub fn event_name(self, id: &str) -> String {
        let prefix = match self {
            Self::Opened => SHOW_PREFIX,
            Self::Closed => HIDE_PREFIX,
        };
        let mut name = String::with_capacity(prefix.len() + id.len());
        name.push_str(prefix);
        name.push_str(id);
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sentinel_is_exact() {
        assert!(is_open_attr(Some("true")));
        assert!(!is_open_attr(Some("TRUE")));
        assert!(!is_open_attr(Some("false")));
        assert!(!is_open_attr(Some("")));
        assert!(!is_open_attr(None));
    }

    #[test]
    fn initial_value_reports_no_transition() {
        let mut visibility = VisibilityState::new(true);
        assert!(visibility.is_open());
        assert_eq!(visibility.update(true), None);
    }

    #[test]
    fn closed_to_open_reports_opened_once() {
        let mut visibility = VisibilityState::new(false);

        assert_eq!(visibility.update(true), Some(Transition::Opened));
        assert!(visibility.is_open());

        // The same value again is a self-transition.
        assert_eq!(visibility.update(true), None);
    }

    #[test]
    fn open_to_closed_reports_closed_once() {
        let mut visibility = VisibilityState::new(true);

        assert_eq!(visibility.update(false), Some(Transition::Closed));
        assert!(!visibility.is_open());
        assert_eq!(visibility.update(false), None);
    }

    #[test]
    fn alternating_values_report_every_transition() {
        let mut visibility = VisibilityState::new(false);
        let mut transitions = 0;

        for open in [true, false, true, false] {
            if visibility.update(open).is_some() {
                transitions += 1;
            }
        }

        assert_eq!(transitions, 4);
    }

    #[test]
    fn refresh_storm_with_no_change_is_idempotent() {
        let mut visibility = VisibilityState::new(false);

        for _ in 0..100 {
            assert_eq!(visibility.update(false), None);
        }
        assert!(!visibility.is_open());
    }

    #[test]
    fn event_names_use_the_id_suffix() {
        assert_eq!(Transition::Opened.event_name("m1"), "show-m1");
        assert_eq!(Transition::Closed.event_name("m1"), "hide-m1");
    }

    #[test]
    fn missing_id_degrades_to_bare_prefix() {
        assert_eq!(Transition::Opened.event_name(""), "show-");
        assert_eq!(Transition::Closed.event_name(""), "hide-");
    }
}
