// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario scripts
//!
//! One step per line: `<signal> <handler>`, or `command <handler> <text...>`.
//! Blank lines and `#` comments are skipped.

use hush_core::{HandlerId, HostSignal};
use thiserror::Error;

/// Errors from reading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("line {line}: unknown signal `{word}`")]
    UnknownSignal { line: usize, word: String },
    #[error("line {line}: `{word}` needs a handler name")]
    MissingHandler { line: usize, word: String },
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}

/// What a step asks the runtime to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create,
    Signal(HostSignal),
    Command(String),
}

/// One parsed scenario line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub handler: HandlerId,
    pub action: Action,
}

/// Parse one line; `Ok(None)` for blanks and comments
pub fn parse_line(line: usize, text: &str) -> Result<Option<Step>, ScenarioError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut words = text.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let action = match word {
        "create" => Action::Create,
        "register" => Action::Signal(HostSignal::Register),
        "arm" => Action::Signal(HostSignal::Arm),
        "expire" => Action::Signal(HostSignal::Expire),
        "deactivate" => Action::Signal(HostSignal::Deactivate),
        "solve" | "forced_terminate" => Action::Signal(HostSignal::ForcedTerminate),
        "destroy" | "teardown" => Action::Signal(HostSignal::Teardown),
        "command" => Action::Command(String::new()),
        other => {
            return Err(ScenarioError::UnknownSignal {
                line,
                word: other.to_string(),
            })
        }
    };

    let handler = words.next().ok_or_else(|| ScenarioError::MissingHandler {
        line,
        word: word.to_string(),
    })?;

    let action = match action {
        Action::Command(_) => Action::Command(words.collect::<Vec<_>>().join(" ")),
        other => other,
    };

    Ok(Some(Step {
        line,
        handler: HandlerId::new(handler),
        action,
    }))
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
