//! Identifier generation.
//!
//! Every default-constructed entity asks an [`IdGenerator`] for its id instead
//! of reaching for global state. [`UuidIds`] is the default and is stateless;
//! [`SequentialIds`] yields predictable ids for fixtures and tooling.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of new entity identifiers.
pub trait IdGenerator {
    /// Produce a fresh identifier.
    fn next_id(&self) -> String;
}

/// Random UUIDv4 identifiers in upper-case hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().hyphenated().to_string().to_uppercase()
    }
}

/// Monotonic `{prefix}-{n}` identifiers, starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}
