// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_line(1, "").unwrap(), None);
    assert_eq!(parse_line(2, "   ").unwrap(), None);
    assert_eq!(parse_line(3, "# setup").unwrap(), None);
}

#[test]
fn signal_lines_parse() {
    let step = parse_line(4, "  arm A ").unwrap().unwrap();
    assert_eq!(
        step,
        Step {
            line: 4,
            handler: HandlerId::new("A"),
            action: Action::Signal(HostSignal::Arm),
        }
    );
}

#[test]
fn aliases_map_to_the_same_signal() {
    let solve = parse_line(1, "solve A").unwrap().unwrap();
    let forced = parse_line(1, "forced_terminate A").unwrap().unwrap();
    assert_eq!(solve.action, forced.action);

    let destroy = parse_line(1, "destroy A").unwrap().unwrap();
    assert_eq!(destroy.action, Action::Signal(HostSignal::Teardown));
}

#[test]
fn command_keeps_remaining_words() {
    let step = parse_line(1, "command B press   the button").unwrap().unwrap();
    assert_eq!(step.action, Action::Command("press the button".to_string()));
}

#[test]
fn unknown_signal_reports_line() {
    let err = parse_line(7, "explode A").unwrap_err();
    assert_eq!(err.to_string(), "line 7: unknown signal `explode`");
}

#[test]
fn missing_handler_reports_word() {
    let err = parse_line(2, "register").unwrap_err();
    assert!(matches!(err, ScenarioError::MissingHandler { line: 2, .. }));
}
