//! Identifier generation for content elements.
//!
//! Element ids come from an injectable [`IdGenerator`] so tests can supply
//! deterministic ids. Slide ids use the readable `slide<k>` scheme instead and
//! never go through this module.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of collision-free identifiers.
///
/// Implementations must be thread-safe; the store itself is single-threaded
/// but callers may share a generator across threads.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random version-4 UUIDs, hyphenated.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        generate_id()
    }
}

/// Deterministic `<prefix>-<n>` ids, starting at 1.
///
/// # Example
///
/// ```rust
/// use slidestore::core::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("el");
/// assert_eq!(ids.generate_id(), "el-1");
/// assert_eq!(ids.generate_id(), "el-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Fresh random identifier (v4 UUID).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
