// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared effect drivers
//!
//! A driver is the single process-wide toggle for the effect. It is created
//! lazily on the first grant and lent mutably only to the current holder, so
//! implementations never see two handlers at once.

mod flag;
mod noop;

pub use flag::FlagDriver;
pub use noop::NoOpDriver;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DriverCall, FakeDriver};

/// Toggle for the shared effect
///
/// Both operations are idempotent and cannot fail.
pub trait EffectDriver: Send + 'static {
    /// Turn the effect on
    fn enable(&mut self);

    /// Turn the effect off
    fn disable(&mut self);
}
