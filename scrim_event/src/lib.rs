// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrim Event: the event model for the Scrim modal bridge.
//!
//! This crate defines the two event shapes the bridge deals in and the seam
//! through which outbound events leave it:
//!
//! - [`ServerEvent`]: an inbound named event with an options payload,
//!   delivered by the host under the fixed [`MODAL_EVENT_CHANNEL`] name.
//! - [`CustomEvent`]: an outbound event dispatched on a bound element,
//!   always bubbling so ancestor listeners can observe it without wiring.
//! - [`EventSink`]: the dispatch seam. Anything that can receive a
//!   [`CustomEvent`] implements it, whether a real element binding or a
//!   test buffer.
//!
//! The model is deliberately permissive. An inbound event with a missing
//! name decodes to an empty name; an empty `redirect_to` target is treated
//! as absent; unrecognized option keys are ignored. The bridge degrades to
//! dispatching a degenerately-named event rather than failing.
//!
//! ## Minimal example
//!
//! ```
//! use scrim_event::{BufferedSink, CustomEvent, EventSink, ServerEvent};
//!
//! let event = ServerEvent::named("close-modal");
//! assert!(event.opts.redirect_target().is_none());
//!
//! let mut sink = BufferedSink::new();
//! sink.dispatch(CustomEvent::bubbling(event.name.clone()));
//!
//! let dispatched: Vec<_> = sink.drain().collect();
//! assert_eq!(dispatched[0].name, "close-modal");
//! assert!(dispatched[0].bubbles);
//! ```
//!
//! ## Wire decoding
//!
//! With the `serde` feature enabled, [`ServerEvent`] decodes from payloads
//! shaped `{"event": "...", "opts": {"redirect_to": "..."}}`. Every field is
//! optional and unknown keys inside `opts` are ignored, matching the
//! inbound channel contract.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod custom;
mod server;
mod sink;

pub use custom::CustomEvent;
pub use server::{EventOpts, MODAL_EVENT_CHANNEL, ServerEvent};
pub use sink::{BufferedSink, EventSink};
