// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use hush_core::HandlerId;
use thiserror::Error;

/// Errors that can occur in the runtime
///
/// Only addressing mistakes are errors. Out-of-order signals to a known
/// handler are no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("handler not found: {0}")]
    UnknownHandler(HandlerId),
    #[error("handler already exists: {0}")]
    DuplicateHandler(HandlerId),
}
