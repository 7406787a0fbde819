// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake driver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::EffectDriver;
use std::sync::{Arc, Mutex};

/// Recorded driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    Enable,
    Disable,
}

#[derive(Default)]
struct FakeDriverState {
    calls: Vec<DriverCall>,
    enabled: bool,
}

/// Fake driver with call recording
///
/// Clones share state, so a test keeps one clone and hands the other to the
/// runtime.
#[derive(Clone, Default)]
pub struct FakeDriver {
    state: Arc<Mutex<FakeDriverState>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DriverCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    pub fn enable_count(&self) -> usize {
        self.count(DriverCall::Enable)
    }

    pub fn disable_count(&self) -> usize {
        self.count(DriverCall::Disable)
    }

    /// Whether the last call left the effect on
    pub fn is_enabled(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).enabled
    }

    fn count(&self, call: DriverCall) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: DriverCall) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.enabled = call == DriverCall::Enable;
        state.calls.push(call);
    }
}

impl EffectDriver for FakeDriver {
    fn enable(&mut self) {
        self.record(DriverCall::Enable);
    }

    fn disable(&mut self) {
        self.record(DriverCall::Disable);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
