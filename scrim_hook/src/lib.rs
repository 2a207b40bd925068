// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrim Hook: a host-agnostic bridge from server-pushed events to bubbling
//! custom events on a bound element.
//!
//! ## Overview
//!
//! A [`ModalHook`] attaches (logically) to one bound element. It does two
//! things:
//!
//! - On each attribute refresh, it diffs the element's open/closed flag
//!   against the last-known value and, on an actual change, dispatches a
//!   derived lifecycle event named `show-<id>` or `hide-<id>`. Refreshes
//!   that report no change dispatch nothing.
//! - On receipt of an inbound [`ServerEvent`](scrim_event::ServerEvent), it
//!   re-dispatches the event name verbatim as a bubbling custom event, and
//!   if the options carry a `redirect_to` target, schedules a one-shot
//!   deferred [`Redirect`] after a fixed short delay.
//!
//! The hook holds no element reference and owns no clock. Hosts hand it the
//! element (anything implementing [`HookElement`]) on every call and pump
//! scheduled redirects out of a [`OneShotQueue`](scrim_timing::OneShotQueue)
//! with their own time source; executing the navigation is the host's job.
//! This keeps the whole behavior deterministic and testable without a DOM.
//!
//! [`HookRegistry`] manages many independent hooks keyed by host-chosen ids
//! and owns the shared redirect queue. Because the queue belongs to the
//! registry, a redirect scheduled by a hook stays pending even if that hook
//! is destroyed before the delay elapses; deferred navigation is
//! fire-and-forget.
//!
//! ## Minimal example
//!
//! ```
//! use scrim_event::{CustomEvent, EventSink, ServerEvent};
//! use scrim_hook::{HookElement, HookRegistry};
//!
//! // A toy element: two attributes and a record of dispatched events.
//! struct Element {
//!     id: &'static str,
//!     show: &'static str,
//!     dispatched: Vec<CustomEvent>,
//! }
//!
//! impl EventSink for Element {
//!     fn dispatch(&mut self, event: CustomEvent) {
//!         self.dispatched.push(event);
//!     }
//! }
//!
//! impl HookElement for Element {
//!     fn attribute(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "id" => Some(self.id),
//!             "show" => Some(self.show),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut element = Element { id: "m1", show: "false", dispatched: Vec::new() };
//! let mut registry = HookRegistry::new();
//!
//! // Attach. Nothing is emitted for the initial state.
//! registry.mounted(1_u32, &element);
//! assert!(element.dispatched.is_empty());
//!
//! // The server template flips the flag; the host signals a refresh.
//! element.show = "true";
//! registry.updated(1, &mut element);
//! assert_eq!(element.dispatched.last().unwrap().name, "show-m1");
//!
//! // A server event with a redirect: dispatched now, navigation due later.
//! let event = ServerEvent::with_redirect("saved", "/dashboard");
//! registry.on_server_event(1, &mut element, &event, 1000);
//! assert_eq!(element.dispatched.last().unwrap().name, "saved");
//! assert_eq!(registry.poll_redirect(1050), None);
//! assert_eq!(registry.poll_redirect(1100).unwrap().target, "/dashboard");
//! ```
//!
//! ## Host integration
//!
//! A host binding (for example a WASM shim over a real element) implements
//! [`HookElement`] by forwarding `attribute` to the element's attributes and
//! `dispatch` to its event system, subscribes to the inbound channel under
//! [`MODAL_EVENT_CHANNEL`](scrim_event::MODAL_EVENT_CHANNEL), and calls
//! [`HookRegistry::poll_redirect`] from its timer tick, applying each due
//! [`Redirect`] to the browser location.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod hook;
mod registry;

pub use element::HookElement;
pub use hook::{HookConfig, ModalHook, REDIRECT_DELAY_MS, Redirect};
pub use registry::HookRegistry;
