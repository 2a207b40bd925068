// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of independent hooks sharing one redirect queue.

use core::hash::Hash;

use hashbrown::HashMap;

use scrim_event::ServerEvent;
use scrim_timing::OneShotQueue;

use crate::element::HookElement;
use crate::hook::{HookConfig, ModalHook, Redirect};

/// Manages the hooks for a page full of bound elements.
///
/// Each element gets its own [`ModalHook`], keyed by a host-chosen id, and
/// the instances share nothing except the redirect queue. The queue lives
/// on the registry rather than on any hook, so a redirect scheduled just
/// before its element is destroyed stays pending and still fires; deferred
/// navigation is fire-and-forget.
///
/// # Type Parameters
///
/// - `K`: The key type, typically the host's element identifier. Must be
///   `Copy + Eq + Hash`.
///
/// # Example
///
/// See the crate-level docs for a full scenario.
#[derive(Debug, Clone)]
pub struct HookRegistry<K>
where
    K: Copy + Eq + Hash,
{
    hooks: HashMap<K, ModalHook>,
    redirects: OneShotQueue<Redirect>,
}

impl<K> Default for HookRegistry<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> HookRegistry<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
            redirects: OneShotQueue::new(),
        }
    }

    /// Attaches a hook for `key` with the default configuration.
    ///
    /// Re-mounting an existing key replaces the previous hook, re-seeding
    /// the last-known state from the element's current attributes.
    pub fn mounted<E: HookElement>(&mut self, key: K, element: &E) {
        self.mounted_with(key, HookConfig::default(), element);
    }

    /// Attaches a hook for `key` with an explicit configuration.
    pub fn mounted_with<E: HookElement>(&mut self, key: K, config: HookConfig, element: &E) {
        self.hooks.insert(key, ModalHook::mounted_with(config, element));
    }

    /// Forwards an attribute refresh to the hook for `key`.
    ///
    /// Returns `false` if no hook is mounted under that key.
    pub fn updated<E: HookElement>(&mut self, key: K, element: &mut E) -> bool {
        match self.hooks.get_mut(&key) {
            Some(hook) => {
                hook.updated(element);
                true
            }
            None => false,
        }
    }

    /// Forwards an inbound server event to the hook for `key`.
    ///
    /// Returns `false` if no hook is mounted under that key; the event is
    /// then dropped without dispatch.
    pub fn on_server_event<E: HookElement>(
        &mut self,
        key: K,
        element: &mut E,
        event: &ServerEvent,
        now_ms: u64,
    ) -> bool {
        match self.hooks.get(&key) {
            Some(hook) => {
                hook.on_server_event(element, event, now_ms, &mut self.redirects);
                true
            }
            None => false,
        }
    }

    /// Detaches the hook for `key`, returning `true` if one was mounted.
    ///
    /// Pending redirects the hook scheduled are left in the queue and will
    /// still become due.
    pub fn destroyed(&mut self, key: K) -> bool {
        self.hooks.remove(&key).is_some()
    }

    /// Returns the hook mounted under `key`, if any.
    #[must_use]
    pub fn hook(&self, key: K) -> Option<&ModalHook> {
        self.hooks.get(&key)
    }

    /// Returns `true` if a hook is mounted under `key`.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.hooks.contains_key(&key)
    }

    /// Returns the number of mounted hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no hooks are mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Removes and returns the earliest redirect that is due at `now_ms`.
    ///
    /// Hosts call this from their timer tick and apply the returned target
    /// to the real location. Returns `None` while nothing is due.
    pub fn poll_redirect(&mut self, now_ms: u64) -> Option<Redirect> {
        self.redirects.pop_due(now_ms).map(|(_, redirect)| redirect)
    }

    /// Returns the deadline of the earliest pending redirect.
    #[must_use]
    pub fn next_redirect_deadline(&self) -> Option<u64> {
        self.redirects.next_deadline()
    }

    /// Returns the number of pending redirects.
    #[must_use]
    pub fn pending_redirects(&self) -> usize {
        self.redirects.len()
    }

    /// Returns a mutable reference to the underlying redirect queue.
    ///
    /// For hosts that want a policy the hook does not implement, such as
    /// cancel-and-replace for overlapping redirects.
    #[must_use]
    pub fn redirects_mut(&mut self) -> &mut OneShotQueue<Redirect> {
        &mut self.redirects
    }
}
