// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host lifecycle signals
//!
//! The host delivers at most one of each per handler, in the partial order
//! Register → [Arm → Expire]* → Deactivate | ForcedTerminate, followed by
//! Teardown. Handlers tolerate any other order.

use crate::handler::HandlerInput;
use serde::{Deserialize, Serialize};

/// A signal delivered by the host to one handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostSignal {
    Register,
    Arm,
    Expire,
    Deactivate,
    ForcedTerminate,
    Teardown,
}

impl HostSignal {
    pub fn name(&self) -> &'static str {
        match self {
            HostSignal::Register => "register",
            HostSignal::Arm => "arm",
            HostSignal::Expire => "expire",
            HostSignal::Deactivate => "deactivate",
            HostSignal::ForcedTerminate => "forced_terminate",
            HostSignal::Teardown => "teardown",
        }
    }
}

impl std::fmt::Display for HostSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<HostSignal> for HandlerInput {
    fn from(signal: HostSignal) -> Self {
        match signal {
            HostSignal::Register => HandlerInput::Register,
            HostSignal::Arm => HandlerInput::Arm,
            HostSignal::Expire => HandlerInput::Expire,
            HostSignal::Deactivate => HandlerInput::Deactivate,
            HostSignal::ForcedTerminate => HandlerInput::ForcedTerminate,
            HostSignal::Teardown => HandlerInput::Teardown,
        }
    }
}
