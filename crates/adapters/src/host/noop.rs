// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op host adapter for hosts that do not wait on acknowledgments.

use super::HostAdapter;
use hush_core::HandlerId;

/// Host adapter that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpHostAdapter;

impl NoOpHostAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl HostAdapter for NoOpHostAdapter {
    fn handle_pass(&self, _handler: &HandlerId) {}
}
