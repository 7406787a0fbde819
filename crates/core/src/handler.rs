// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler state machine
//!
//! A handler is one client that may hold the shared effect. It reacts to host
//! lifecycle signals and to the grant from the handoff queue.
//!
//! ## Pass-through
//!
//! A handler that is waiting in line, or that has been released, still gets
//! armed by the host. It answers every arm with an immediate acknowledgment so
//! the host is never left waiting on a handler that cannot touch the effect.
//!
//! ## Release ordering
//!
//! When a handler that has the effect enabled is released, it disables the
//! effect and acknowledges the open cycle *before* leaving the queue, so the
//! next holder is never granted while the effect is still on.

use crate::effect::{Effect, Event};
use crate::id::HandlerId;
use serde::{Deserialize, Serialize};

/// The state of a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerState {
    /// Created, not yet registered
    Idle,
    /// In the queue behind another holder
    Waiting,
    /// Holder, effect currently off
    Armed,
    /// Holder, effect currently on
    Active,
    /// Deregistered; answers arms as pass-through
    Released,
    /// Torn down; ignores everything
    Destroyed,
}

impl HandlerState {
    /// Whether the handler has an entry in the queue
    pub fn is_queued(&self) -> bool {
        matches!(
            self,
            HandlerState::Waiting | HandlerState::Armed | HandlerState::Active
        )
    }

    /// Whether the handler currently holds the effect
    pub fn is_holding(&self) -> bool {
        matches!(self, HandlerState::Armed | HandlerState::Active)
    }
}

impl std::fmt::Display for HandlerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandlerState::Idle => "idle",
            HandlerState::Waiting => "waiting",
            HandlerState::Armed => "armed",
            HandlerState::Active => "active",
            HandlerState::Released => "released",
            HandlerState::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

/// Inputs that drive handler transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerInput {
    /// Host activated the handler; join the queue
    Register,
    /// Queue granted the effect to this handler
    BeginGranted,
    /// Host armed the handler for one cycle
    Arm,
    /// Host cycle timer expired
    Expire,
    /// Host deactivated the handler
    Deactivate,
    /// Host force-solved the handler
    ForcedTerminate,
    /// Host destroyed the handler
    Teardown,
}

/// A client of the shared effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub id: HandlerId,
    pub state: HandlerState,
}

impl Handler {
    /// Create a new handler in the Idle state
    pub fn new(id: HandlerId) -> Self {
        Self {
            id,
            state: HandlerState::Idle,
        }
    }

    /// Pure state transition function
    pub fn transition(&self, input: HandlerInput) -> (Handler, Vec<Effect>) {
        let id = self.id.clone();

        match (self.state, input) {
            (HandlerState::Destroyed, _) => (self.clone(), vec![]),

            (HandlerState::Idle, HandlerInput::Register) => (
                self.with_state(HandlerState::Waiting),
                vec![
                    Effect::Emit(Event::HandlerQueued {
                        handler: id.clone(),
                    }),
                    Effect::JoinQueue { handler: id },
                ],
            ),

            (HandlerState::Waiting, HandlerInput::BeginGranted) => (
                self.with_state(HandlerState::Armed),
                vec![Effect::Emit(Event::HolderGranted { handler: id })],
            ),

            (HandlerState::Armed, HandlerInput::Arm) => (
                self.with_state(HandlerState::Active),
                vec![
                    Effect::Enable {
                        handler: id.clone(),
                    },
                    Effect::Emit(Event::EffectEnabled { handler: id }),
                ],
            ),

            (HandlerState::Active, HandlerInput::Expire) => {
                (self.with_state(HandlerState::Armed), self.close_cycle())
            }

            (HandlerState::Waiting | HandlerState::Released, HandlerInput::Arm) => (
                self.clone(),
                vec![
                    Effect::Acknowledge {
                        handler: id.clone(),
                    },
                    Effect::Emit(Event::CyclePassed { handler: id }),
                ],
            ),

            (state, HandlerInput::Deactivate | HandlerInput::ForcedTerminate)
                if state != HandlerState::Released =>
            {
                let forced = input == HandlerInput::ForcedTerminate;
                let mut effects = self.release();
                effects.push(Effect::Emit(Event::HandlerReleased {
                    handler: id,
                    forced,
                }));
                (self.with_state(HandlerState::Released), effects)
            }

            (_, HandlerInput::Teardown) => {
                let mut effects = self.release();
                effects.push(Effect::Emit(Event::HandlerDestroyed { handler: id }));
                (self.with_state(HandlerState::Destroyed), effects)
            }

            // Re-registration, a second grant, expire without arm, arm while
            // already on, and repeated releases are all no-ops.
            _ => (self.clone(), vec![]),
        }
    }

    fn with_state(&self, state: HandlerState) -> Handler {
        Handler {
            state,
            ..self.clone()
        }
    }

    /// Turn the effect off and acknowledge the open cycle
    fn close_cycle(&self) -> Vec<Effect> {
        let handler = self.id.clone();
        vec![
            Effect::Disable {
                handler: handler.clone(),
            },
            Effect::Emit(Event::EffectDisabled {
                handler: handler.clone(),
            }),
            Effect::Acknowledge {
                handler: handler.clone(),
            },
            Effect::Emit(Event::CycleAcknowledged { handler }),
        ]
    }

    /// Cleanup shared by deactivate, forced termination and teardown
    fn release(&self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.state == HandlerState::Active {
            effects.extend(self.close_cycle());
        }
        if self.state.is_queued() {
            effects.push(Effect::LeaveQueue {
                handler: self.id.clone(),
            });
        }
        effects
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
