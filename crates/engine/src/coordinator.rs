// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue coordinator
//!
//! Owns the handoff queue and the shared driver. The driver is created on
//! the first grant and only ever lent to the handler at the front of the
//! queue, so two handlers can never toggle it.

use hush_adapters::EffectDriver;
use hush_core::{Effect, HandlerId, HandoffQueue};

/// Builds the shared driver on first use
pub type DriverFactory<D> = Box<dyn FnMut() -> D + Send>;

/// Handoff queue plus the driver it guards
pub struct Coordinator<D> {
    queue: HandoffQueue,
    driver: Option<D>,
    factory: DriverFactory<D>,
}

impl<D: EffectDriver> Coordinator<D> {
    pub fn new(factory: DriverFactory<D>) -> Self {
        Self {
            queue: HandoffQueue::new(),
            driver: None,
            factory,
        }
    }

    /// Register a handler; true if it holds the effect afterwards
    pub fn register(&mut self, handler: HandlerId) -> (bool, Vec<Effect>) {
        let (granted, effects) = self.queue.register(handler);
        self.provision(&effects);
        (granted, effects)
    }

    /// Deregister a handler, promoting the next waiter if it held the effect
    pub fn remove(&mut self, handler: &HandlerId) -> Vec<Effect> {
        let effects = self.queue.remove(handler);
        self.provision(&effects);
        effects
    }

    /// The driver, if `handler` is the current holder and a driver exists
    pub fn driver_for(&mut self, handler: &HandlerId) -> Option<&mut D> {
        if !self.queue.is_holder(handler) {
            return None;
        }
        self.driver.as_mut()
    }

    pub fn holder(&self) -> Option<&HandlerId> {
        self.queue.holder()
    }

    pub fn queue(&self) -> &HandoffQueue {
        &self.queue
    }

    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    fn provision(&mut self, effects: &[Effect]) {
        let granted = effects.iter().any(|e| matches!(e, Effect::Begin { .. }));
        if granted && self.driver.is_none() {
            tracing::debug!("creating shared driver");
            self.driver = Some((self.factory)());
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
