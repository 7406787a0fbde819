// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::HostAdapter;
use hush_core::HandlerId;
use std::sync::{Arc, Mutex};

/// Recorded host call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Pass { handler: HandlerId },
}

/// Fake host adapter for testing
#[derive(Clone, Default)]
pub struct FakeHostAdapter {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl FakeHostAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of acknowledgments sent for one handler
    pub fn passes_for(&self, handler: &HandlerId) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, HostCall::Pass { handler: h } if h == handler))
            .count()
    }
}

impl HostAdapter for FakeHostAdapter {
    fn handle_pass(&self, handler: &HandlerId) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(HostCall::Pass {
                handler: handler.clone(),
            });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
