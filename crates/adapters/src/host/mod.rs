// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host acknowledgment adapters

mod noop;

pub use noop::NoOpHostAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHostAdapter, HostCall};

use hush_core::HandlerId;

/// Adapter for signals sent back to the host
pub trait HostAdapter: Clone + Send + Sync + 'static {
    /// Report that the handler's current cycle is handled
    fn handle_pass(&self, handler: &HandlerId);
}
