//! Error types for fetch and cache operations.
//!
//! This module defines [`FetchError`] which covers all error cases that can
//! occur when fetching pages from the remote API or reading and writing the
//! response cache.

use thiserror::Error;

/// Errors that can occur during fetch and cache operations.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The requested key is not present in the cache.
    #[error("Cache key not found: {0}")]
    KeyNotFound(String),

    /// Error reading or writing the cache store.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Transport-level network errors (connection failures, timeouts, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// Error parsing a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias using [`FetchError`].
pub type Result<T> = std::result::Result<T, FetchError>;
