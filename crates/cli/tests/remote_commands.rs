// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for the remote command interface

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{hush, stdout_of, Workspace};
use predicates::prelude::*;

#[test]
fn help_text_is_fixed() {
    hush()
        .arg("help-text")
        .assert()
        .success()
        .stdout("This module does not accept commands.\n");
}

#[test]
fn command_is_rejected_without_state_change() {
    let ws = Workspace::new();
    let scenario = ws.file(
        "command.txt",
        "create A\nregister A\narm A\ncommand A press 1\n",
    );

    let stdout = stdout_of(hush().arg("run").arg(&scenario));

    assert!(stdout.contains(
        "response A: sendtochaterror This module does not accept commands.\n"
    ));
    assert!(stdout.contains("command:rejected A\n"));
    assert!(stdout.ends_with("holder A\neffect on\n"));
}

#[test]
fn command_for_waiting_handler_is_rejected_too() {
    let ws = Workspace::new();
    let scenario = ws.file(
        "command.txt",
        "create A\ncreate B\nregister A\nregister B\ncommand B solve\n",
    );

    hush()
        .arg("run")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("response B: sendtochaterror"))
        .stdout(predicate::str::ends_with("holder A\neffect off\n"));
}
