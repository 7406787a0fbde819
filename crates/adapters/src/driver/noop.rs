// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op driver for hosts without a renderer.

use super::EffectDriver;

/// Driver that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDriver;

impl NoOpDriver {
    pub fn new() -> Self {
        Self
    }
}

impl EffectDriver for NoOpDriver {
    fn enable(&mut self) {}

    fn disable(&mut self) {}
}
