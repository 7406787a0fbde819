// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use hush_core::{CommandResponse, Event, HandlerId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Reply<'a> {
    handler: &'a HandlerId,
    response: String,
}

#[derive(Serialize)]
struct Summary<'a> {
    holder: Option<&'a HandlerId>,
    effect_running: bool,
}

/// Render one event
pub fn render_event(event: &Event, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{} {}", event.name(), event.handler())),
        OutputFormat::Json => serde_json::to_string(event),
    }
}

/// Render the reply to a remote command
pub fn render_response(
    handler: &HandlerId,
    response: &CommandResponse,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("response {}: {}", handler, response.to_chat())),
        OutputFormat::Json => serde_json::to_string(&Reply {
            handler,
            response: response.to_chat(),
        }),
    }
}

/// Render the final effect state
pub fn render_summary(
    holder: Option<&HandlerId>,
    effect_running: bool,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let holder = holder.map_or_else(|| "none".to_string(), |h| h.to_string());
            let effect = if effect_running { "on" } else { "off" };
            Ok(format!("holder {}\neffect {}", holder, effect))
        }
        OutputFormat::Json => serde_json::to_string(&Summary {
            holder,
            effect_running,
        }),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
