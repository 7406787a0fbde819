// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn fake_host_records_passes() {
    let host = FakeHostAdapter::new();
    let a = HandlerId::new("A");
    let b = HandlerId::new("B");

    host.handle_pass(&a);
    host.handle_pass(&b);
    host.handle_pass(&a);

    assert_eq!(host.calls().len(), 3);
    assert_eq!(host.calls()[1], HostCall::Pass { handler: b.clone() });
    assert_eq!(host.passes_for(&a), 2);
    assert_eq!(host.passes_for(&b), 1);
}
