// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bound-element seam.

use scrim_event::EventSink;

/// A bound element as the hook sees it.
///
/// The hook needs exactly two capabilities from an element: reading string
/// attributes and dispatching custom events ([`EventSink`]). The element is
/// owned by the host and handed to the hook on each call; the hook never
/// stores it.
///
/// Attribute reads are permissive by contract: a missing attribute is
/// `None` and the hook treats it as a falsy default (flag absent means
/// closed, identifier absent means an empty event-name suffix).
pub trait HookElement: EventSink {
    /// Returns the current value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}
