// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatch seam and a buffering implementation of it.

use alloc::vec::Vec;

use crate::custom::CustomEvent;

/// A receiver for outbound custom events.
///
/// The bridge only ever pushes events through this trait; it never inspects
/// or retains them afterwards. A host binding forwards events to its real
/// event system; tests and demos collect them with [`BufferedSink`].
pub trait EventSink {
    /// Delivers one event. Dispatch is synchronous and infallible: a sink
    /// that cannot deliver must swallow, not fail outward.
    fn dispatch(&mut self, event: CustomEvent);
}

/// An [`EventSink`] that records dispatched events in order.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    events: Vec<CustomEvent>,
}

impl BufferedSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in dispatch order.
    #[must_use]
    pub fn events(&self) -> &[CustomEvent] {
        &self.events
    }

    /// Removes and returns the recorded events in dispatch order.
    pub fn drain(&mut self) -> impl Iterator<Item = CustomEvent> + '_ {
        self.events.drain(..)
    }

    /// Returns `true` if nothing has been dispatched since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for BufferedSink {
    fn dispatch(&mut self, event: CustomEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn records_in_dispatch_order() {
        let mut sink = BufferedSink::new();
        assert!(sink.is_empty());

        sink.dispatch(CustomEvent::bubbling("first"));
        sink.dispatch(CustomEvent::bubbling("second"));

        let names: Vec<_> = sink.events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn drain_empties_the_sink() {
        let mut sink = BufferedSink::new();
        sink.dispatch(CustomEvent::bubbling("only"));

        let drained: Vec<_> = sink.drain().collect();
        assert_eq!(drained.len(), 1);
        assert!(sink.is_empty());
    }
}
