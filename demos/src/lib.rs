// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Scrim demos: a scripted element that prints
//! dispatched events, standing in for a real host binding.

use scrim_event::{CustomEvent, EventSink};
use scrim_hook::HookElement;

/// A bound element driven by a demo script.
///
/// Attribute writes mimic the server re-rendering the template; dispatched
/// events are printed and recorded.
#[derive(Debug)]
pub struct DemoElement {
    id: String,
    show: String,
    /// Every event dispatched on this element, in order.
    pub dispatched: Vec<CustomEvent>,
}

impl DemoElement {
    /// Creates an element with the given identifier and flag value.
    #[must_use]
    pub fn new(id: &str, show: &str) -> Self {
        Self {
            id: String::from(id),
            show: String::from(show),
            dispatched: Vec::new(),
        }
    }

    /// Overwrites the flag attribute, as a server render would.
    pub fn set_show(&mut self, value: &str) {
        self.show = String::from(value);
    }
}

impl EventSink for DemoElement {
    fn dispatch(&mut self, event: CustomEvent) {
        println!("  [{}] dispatched {:?} (bubbles: {})", self.id, event.name, event.bubbles);
        self.dispatched.push(event);
    }
}

impl HookElement for DemoElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "show" => Some(&self.show),
            _ => None,
        }
    }
}
