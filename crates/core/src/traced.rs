// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing infrastructure for effects

use crate::effect::Effect;

/// Trait for operations that should be traced
///
/// Provides consistent naming and structured fields for logging.
pub trait TracedEffect {
    /// Effect name for log spans (e.g., "enable", "join_queue")
    fn name(&self) -> &'static str;

    /// Key-value pairs for structured logging
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::Emit(_) => "emit",
            Effect::JoinQueue { .. } => "join_queue",
            Effect::LeaveQueue { .. } => "leave_queue",
            Effect::Begin { .. } => "begin",
            Effect::Enable { .. } => "enable",
            Effect::Disable { .. } => "disable",
            Effect::Acknowledge { .. } => "acknowledge",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Emit(event) => vec![
                ("event", event.name().to_string()),
                ("handler", event.handler().to_string()),
            ],
            Effect::JoinQueue { handler }
            | Effect::LeaveQueue { handler }
            | Effect::Begin { handler }
            | Effect::Enable { handler }
            | Effect::Disable { handler }
            | Effect::Acknowledge { handler } => vec![("handler", handler.to_string())],
        }
    }
}
