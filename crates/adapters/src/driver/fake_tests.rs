// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_driver_records_calls() {
    let observer = FakeDriver::new();
    let mut driver = observer.clone();

    driver.enable();
    assert!(observer.is_enabled());
    driver.disable();

    assert_eq!(
        observer.calls(),
        vec![DriverCall::Enable, DriverCall::Disable]
    );
    assert_eq!(observer.enable_count(), 1);
    assert_eq!(observer.disable_count(), 1);
    assert!(!observer.is_enabled());
}
