// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag driver
//!
//! Exposes the effect as a shared boolean that a render loop polls once per
//! frame. Clones observe the same flag.

use super::EffectDriver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Driver backed by a shared "run effect" flag
#[derive(Clone, Debug, Default)]
pub struct FlagDriver {
    running: Arc<AtomicBool>,
}

impl FlagDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the effect should currently be applied
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl EffectDriver for FlagDriver {
    fn enable(&mut self) {
        self.running.store(true, Ordering::SeqCst);
    }

    fn disable(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let observer = FlagDriver::new();
        let mut driver = observer.clone();
        assert!(!observer.is_running());

        driver.enable();
        assert!(observer.is_running());

        driver.enable();
        driver.disable();
        assert!(!observer.is_running());
    }
}
