// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handoff queue for the shared effect
//!
//! Handlers wait in strict insertion order. The front available entry is
//! always the holder; when it first reaches the front it is granted once.
//!
//! Removal only flips `available`. Stale entries are discarded lazily from
//! the front during selection, so the queue is never reordered and removal
//! stays O(1) amortized.

use crate::effect::Effect;
use crate::id::HandlerId;
use std::collections::VecDeque;

/// One registration in the handoff queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub handler: HandlerId,
    /// Still registered and eligible to become holder
    pub available: bool,
    /// Begin has fired for this entry
    pub active: bool,
}

impl QueueEntry {
    fn new(handler: HandlerId) -> Self {
        Self {
            handler,
            available: true,
            active: false,
        }
    }
}

/// FIFO admission queue with a single holder slot
#[derive(Debug, Clone, Default)]
pub struct HandoffQueue {
    entries: VecDeque<QueueEntry>,
}

impl HandoffQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler and reselect
    ///
    /// Returns true if the handler is the holder afterwards. Registering the
    /// same handler twice creates two entries.
    pub fn register(&mut self, handler: HandlerId) -> (bool, Vec<Effect>) {
        self.entries.push_back(QueueEntry::new(handler.clone()));
        let (holder, effects) = self.select();
        (holder.as_ref() == Some(&handler), effects)
    }

    /// Mark every entry for this handler unavailable and reselect
    ///
    /// Unknown handlers are a no-op apart from the reselection.
    pub fn remove(&mut self, handler: &HandlerId) -> Vec<Effect> {
        for entry in self.entries.iter_mut().filter(|e| &e.handler == handler) {
            entry.available = false;
        }
        let (_, effects) = self.select();
        effects
    }

    /// Discard stale entries from the front and grant the front entry
    ///
    /// Emits `Effect::Begin` only when the front entry was not yet active.
    pub fn select(&mut self) -> (Option<HandlerId>, Vec<Effect>) {
        while self.entries.front().is_some_and(|e| !e.available) {
            if let Some(stale) = self.entries.pop_front() {
                tracing::trace!(handler = %stale.handler, "discarded stale entry");
            }
        }

        let Some(front) = self.entries.front_mut() else {
            return (None, Vec::new());
        };

        let mut effects = Vec::new();
        if !front.active {
            front.active = true;
            effects.push(Effect::Begin {
                handler: front.handler.clone(),
            });
        }
        (Some(front.handler.clone()), effects)
    }

    /// The current holder, if any
    pub fn holder(&self) -> Option<&HandlerId> {
        self.entries
            .front()
            .filter(|e| e.available && e.active)
            .map(|e| &e.handler)
    }

    pub fn is_holder(&self, handler: &HandlerId) -> bool {
        self.holder() == Some(handler)
    }

    /// Handlers still waiting behind the holder, in order
    pub fn waiting(&self) -> impl Iterator<Item = &HandlerId> {
        self.entries
            .iter()
            .filter(|e| e.available && !e.active)
            .map(|e| &e.handler)
    }

    /// Number of entries active at once (0 or 1)
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.active).count()
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }

    /// Number of entries, including stale ones not yet discarded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
