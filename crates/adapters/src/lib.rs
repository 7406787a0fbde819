// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the effect driver and the host

pub mod driver;
pub mod host;
pub mod traced;

pub use driver::{EffectDriver, FlagDriver, NoOpDriver};
pub use host::{HostAdapter, NoOpHostAdapter};
pub use traced::{TracedDriver, TracedHost};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use driver::{DriverCall, FakeDriver};
#[cfg(any(test, feature = "test-support"))]
pub use host::{FakeHostAdapter, HostCall};
