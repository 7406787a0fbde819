// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush-core: Core library for the hush effect arbiter
//!
//! This crate provides:
//! - Pure state machines for handlers and the handoff queue
//! - Effect-based orchestration
//! - Host signals and the remote command responder
//! - TOML configuration

pub mod command;
pub mod config;
pub mod id;
pub mod signal;
pub mod traced;

// State machines (order matters for dependencies)
pub mod effect;
pub mod handler;
pub mod queue;

// Re-exports
pub use command::{CommandResponse, HELP_MESSAGE};
pub use config::{ConfigError, HushConfig};
pub use effect::{Effect, Event};
pub use handler::{Handler, HandlerInput, HandlerState};
pub use id::{HandlerId, IdGen, SequentialIdGen};
pub use queue::{HandoffQueue, QueueEntry};
pub use signal::HostSignal;
pub use traced::TracedEffect;
