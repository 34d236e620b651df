#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wbdata-rs/wbdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the World Bank indicator fetch layer.
//!
//! This crate provides the foundational abstractions shared by the cache
//! backends and the paginated fetcher:
//!
//! - [`FetchCache`](cache::FetchCache) - Memoization of raw responses by URL
//! - [`CacheEntry`](cache::CacheEntry) - The `(day-count, body)` value type
//! - [`PagedResponse`](envelope::PagedResponse) - The `[metadata, records]` envelope
//! - [`daycount`] - The day-granularity freshness clock
//! - [`FetchError`](error::FetchError) - Shared error taxonomy

/// Cache trait and entry type for memoized fetch results.
pub mod cache;
/// Day-count freshness clock.
pub mod daycount;
/// Paged response envelope decoding.
pub mod envelope;
/// Error types for fetch and cache operations.
pub mod error;

// Re-export commonly used items at crate root
pub use cache::{CacheEntry, FetchCache};
pub use daycount::EXPIRY_DAYS;
pub use envelope::{PageMeta, PagedResponse, Record};
pub use error::{FetchError, Result};
