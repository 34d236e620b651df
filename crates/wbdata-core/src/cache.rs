//! Cache trait for storing raw fetch results.
//!
//! This module defines the [`FetchCache`] trait that provides a unified
//! interface for memoizing raw API responses keyed by the exact request URL,
//! and [`CacheEntry`], the value stored per key.

use serde::{Deserialize, Serialize};

use crate::daycount::EXPIRY_DAYS;
use crate::error::Result;

/// A single cached fetch result.
///
/// Serializes as the 2-tuple `(fetched_day, body)` so the persistent form is
/// a plain mapping from URL to `(day-count, body-or-null)`. The body is
/// `None` when the fetch produced no response at all; caching the absence
/// keeps a dead endpoint from being re-hammered within the freshness window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, Option<String>)", into = "(i64, Option<String>)")]
pub struct CacheEntry {
    /// Day count (see [`crate::daycount`]) at which the fetch happened.
    pub fetched_day: i64,
    /// Raw response body, or `None` if no response was obtained.
    pub body: Option<String>,
}

impl CacheEntry {
    /// Create an entry fetched on the given day.
    #[must_use]
    pub fn new(fetched_day: i64, body: Option<String>) -> Self {
        Self { fetched_day, body }
    }

    /// Whether this entry is still reusable on the given day.
    #[must_use]
    pub fn is_fresh(&self, today: i64) -> bool {
        today - self.fetched_day < EXPIRY_DAYS
    }
}

impl From<(i64, Option<String>)> for CacheEntry {
    fn from((fetched_day, body): (i64, Option<String>)) -> Self {
        Self { fetched_day, body }
    }
}

impl From<CacheEntry> for (i64, Option<String>) {
    fn from(entry: CacheEntry) -> Self {
        (entry.fetched_day, entry.body)
    }
}

/// Trait for memoizing raw fetch results.
///
/// Implementations can keep entries on disk (persistent across process
/// restarts) or in memory (test isolation). Keys are fully-qualified request
/// URLs including the query string. All methods are synchronous; callers are
/// expected to run single-threaded, blocking fetch loops.
pub trait FetchCache: Send + Sync {
    /// Look up the entry for a key.
    ///
    /// # Errors
    /// Returns [`FetchError::KeyNotFound`](crate::FetchError::KeyNotFound)
    /// if the key is absent.
    fn get(&self, key: &str) -> Result<CacheEntry>;

    /// Membership test. Never mutates the store.
    fn contains(&self, key: &str) -> bool;

    /// Unconditionally overwrite the entry for a key, then flush the whole
    /// store to its backing location.
    ///
    /// # Errors
    /// Returns an error if the flush fails; the store is write-through and a
    /// failed write is not recoverable at this layer.
    fn set(&self, key: &str, entry: CacheEntry) -> Result<()>;

    /// Flush the entire in-memory mapping to the backing store.
    ///
    /// Backends without a persistent form may no-op.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    fn sync(&self) -> Result<()>;
}
