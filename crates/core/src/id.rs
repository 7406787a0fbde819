// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler identity and ID generation

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for a handler
///
/// The queue compares handlers by identity only; it never owns them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandlerId(pub String);

impl HandlerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HandlerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Generates unique identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Sequential ID generator
///
/// Handlers are numbered in creation order, starting at 1.
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("handler")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_gen_creates_predictable_ids() {
        let id_gen = SequentialIdGen::new("test");
        assert_eq!(id_gen.next(), "test-1");
        assert_eq!(id_gen.next(), "test-2");
        assert_eq!(id_gen.next(), "test-3");
    }

    #[test]
    fn sequential_gen_is_cloneable_and_shared() {
        let id_gen1 = SequentialIdGen::new("shared");
        let id_gen2 = id_gen1.clone();
        assert_eq!(id_gen1.next(), "shared-1");
        assert_eq!(id_gen2.next(), "shared-2");
        assert_eq!(id_gen1.next(), "shared-3");
    }

    #[test]
    fn default_gen_uses_handler_prefix() {
        assert_eq!(SequentialIdGen::default().next(), "handler-1");
    }

    #[test]
    fn handler_id_serializes_as_plain_string() {
        let id = HandlerId::new("A");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A\"");
        assert_eq!(id.to_string(), "A");
    }
}
