// Copyright 2025 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrim Timing: a host-agnostic one-shot timer queue.
//!
//! The queue holds payloads with millisecond deadlines and hands them back
//! when the host's clock says they are due. No threads, no real clock, no
//! wakeups: the host passes `now_ms` into every time-sensitive call, which
//! makes deferred work fully deterministic and trivially testable.
//!
//! Ordering is by deadline, earliest first; entries sharing a deadline come
//! back in scheduling order. Entries are one-shot (popping removes them)
//! and a [`TimerId`] is never reused by the same queue.
//!
//! ## Minimal example
//!
//! ```
//! use scrim_timing::OneShotQueue;
//!
//! let mut queue = OneShotQueue::new();
//! queue.schedule_after(0, 100, "navigate");
//!
//! // Not due yet at t=99.
//! assert_eq!(queue.pop_due(99), None);
//!
//! // Due exactly at the deadline.
//! let (_, payload) = queue.pop_due(100).unwrap();
//! assert_eq!(payload, "navigate");
//! assert!(queue.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use smallvec::SmallVec;

/// Identifies one scheduled entry within its queue.
///
/// Ids are assigned from a monotone counter and never reused, so a stale id
/// held after its entry fired simply fails to cancel anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    deadline_ms: u64,
    payload: T,
}

/// A deadline-ordered queue of one-shot payloads.
///
/// The queue keeps entries sorted by `(deadline, scheduling order)`, so
/// [`pop_due`](Self::pop_due) is a front pop and draining due work is a
/// simple loop. A handful of pending entries is the expected load; storage
/// is inline until the queue grows past that.
#[derive(Debug, Clone)]
pub struct OneShotQueue<T> {
    // Sorted by (deadline_ms, id). Ties keep scheduling order because ids
    // are monotone.
    entries: SmallVec<[Entry<T>; 4]>,
    next_id: u64,
}

impl<T> Default for OneShotQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OneShotQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Schedules a payload to become due at an absolute deadline.
    pub fn schedule_at(&mut self, deadline_ms: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let entry = Entry {
            id,
            deadline_ms,
            payload,
        };
        let at = self
            .entries
            .partition_point(|e| (e.deadline_ms, e.id.0) <= (deadline_ms, id.0));
        self.entries.insert(at, entry);
        id
    }

    /// Schedules a payload to become due `delay_ms` after `now_ms`.
    ///
    /// The deadline saturates at `u64::MAX` rather than wrapping.
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TimerId {
        self.schedule_at(now_ms.saturating_add(delay_ms), payload)
    }

    /// Removes and returns the earliest entry whose deadline has passed.
    ///
    /// Returns `None` while nothing is due; an entry is due once
    /// `now_ms >= deadline`, never before. Call in a loop to drain all due
    /// work for the current clock reading.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, T)> {
        if self.entries.first()?.deadline_ms > now_ms {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.payload))
    }

    /// Cancels a pending entry, returning its payload if it was still queued.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let at = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(at).payload)
    }

    /// Returns the deadline of the earliest pending entry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline_ms)
    }

    /// Returns the number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all pending entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
