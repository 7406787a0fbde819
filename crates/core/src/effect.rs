// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::id::HandlerId;
use serde::{Deserialize, Serialize};

/// Effects are side effects that state machines request
///
/// Handlers and the handoff queue never touch the queue, the driver, or the
/// host directly. The runtime executes these in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
    /// Append the handler to the handoff queue
    JoinQueue { handler: HandlerId },
    /// Mark the handler's queue entries unavailable
    LeaveQueue { handler: HandlerId },
    /// Grant the handler the shared effect (its begin callback)
    Begin { handler: HandlerId },
    /// Turn the shared effect on
    Enable { handler: HandlerId },
    /// Turn the shared effect off
    Disable { handler: HandlerId },
    /// Tell the host this activation cycle is handled
    Acknowledge { handler: HandlerId },
}

/// Events emitted by state machines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    // Handler events
    HandlerCreated {
        handler: HandlerId,
    },
    HandlerQueued {
        handler: HandlerId,
    },
    HandlerWaiting {
        handler: HandlerId,
    },
    HolderGranted {
        handler: HandlerId,
    },
    HandlerReleased {
        handler: HandlerId,
        forced: bool,
    },
    HandlerDestroyed {
        handler: HandlerId,
    },

    // Effect events
    EffectEnabled {
        handler: HandlerId,
    },
    EffectDisabled {
        handler: HandlerId,
    },

    // Cycle events
    CycleAcknowledged {
        handler: HandlerId,
    },
    CyclePassed {
        handler: HandlerId,
    },

    // Command events
    CommandRejected {
        handler: HandlerId,
        command: String,
    },
}

impl Event {
    /// Get the event name for pattern matching
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            Event::HandlerCreated { .. } => "handler:created",
            Event::HandlerQueued { .. } => "handler:queued",
            Event::HandlerWaiting { .. } => "handler:waiting",
            Event::HolderGranted { .. } => "holder:granted",
            Event::HandlerReleased { .. } => "handler:released",
            Event::HandlerDestroyed { .. } => "handler:destroyed",

            Event::EffectEnabled { .. } => "effect:enabled",
            Event::EffectDisabled { .. } => "effect:disabled",

            Event::CycleAcknowledged { .. } => "cycle:acknowledged",
            Event::CyclePassed { .. } => "cycle:passed",

            Event::CommandRejected { .. } => "command:rejected",
        }
    }

    /// The handler this event concerns
    pub fn handler(&self) -> &HandlerId {
        match self {
            Event::HandlerCreated { handler }
            | Event::HandlerQueued { handler }
            | Event::HandlerWaiting { handler }
            | Event::HolderGranted { handler }
            | Event::HandlerReleased { handler, .. }
            | Event::HandlerDestroyed { handler }
            | Event::EffectEnabled { handler }
            | Event::EffectDisabled { handler }
            | Event::CycleAcknowledged { handler }
            | Event::CyclePassed { handler }
            | Event::CommandRejected { handler, .. } => handler,
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
