// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote command interface
//!
//! Handlers accept no remote commands. Every command gets the same chat
//! error and changes nothing. A forced-solve request is not a command; the
//! runtime routes it to `HostSignal::ForcedTerminate`.

use serde::{Deserialize, Serialize};

/// Help text advertised to remote operators
pub const HELP_MESSAGE: &str = "This module does not accept commands.";

/// Prefix telling the remote host to show the message as a chat error
const CHAT_ERROR_PREFIX: &str = "sendtochaterror";

/// Response to a remote command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResponse {
    Rejected { message: String },
}

impl CommandResponse {
    /// Respond to any command text
    pub fn respond(_command: &str) -> Self {
        CommandResponse::Rejected {
            message: HELP_MESSAGE.to_string(),
        }
    }

    /// Line sent back to the remote host
    pub fn to_chat(&self) -> String {
        match self {
            CommandResponse::Rejected { message } => format!("{} {}", CHAT_ERROR_PREFIX, message),
        }
    }
}
