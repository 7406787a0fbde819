// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::driver::EffectDriver;
use crate::host::HostAdapter;
use hush_core::HandlerId;

/// Wrapper that adds tracing to any EffectDriver
#[derive(Clone, Debug, Default)]
pub struct TracedDriver<D> {
    inner: D,
    enabled: bool,
}

impl<D> TracedDriver<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            enabled: false,
        }
    }
}

impl<D: EffectDriver> EffectDriver for TracedDriver<D> {
    fn enable(&mut self) {
        let span = tracing::info_span!("driver.enable");
        let _guard = span.enter();

        if self.enabled {
            tracing::debug!("already enabled");
        }
        self.inner.enable();
        self.enabled = true;
        tracing::info!("effect on");
    }

    fn disable(&mut self) {
        let span = tracing::info_span!("driver.disable");
        let _guard = span.enter();

        if !self.enabled {
            tracing::debug!("already disabled");
        }
        self.inner.disable();
        self.enabled = false;
        tracing::info!("effect off");
    }
}

/// Wrapper that adds tracing to any HostAdapter
#[derive(Clone, Debug, Default)]
pub struct TracedHost<H> {
    inner: H,
}

impl<H> TracedHost<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: HostAdapter> HostAdapter for TracedHost<H> {
    fn handle_pass(&self, handler: &HandlerId) {
        let span = tracing::info_span!("host.pass", handler = %handler);
        let _guard = span.enter();

        self.inner.handle_pass(handler);
        tracing::debug!("acknowledged");
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
