#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wbdata-rs/wbdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Cache backends for the World Bank indicator fetch layer.
//!
//! This crate provides implementations of the [`FetchCache`] trait from
//! `wbdata-core`:
//!
//! - [`DiskCache`] - Persistent single-file cache (default)
//! - [`InMemoryCache`] - Simple in-memory cache for testing

/// Persistent single-file cache implementation.
pub mod disk;
/// In-memory cache implementation.
pub mod memory;

// Re-export the trait for convenience
pub use wbdata_core::FetchCache;

// Re-export implementations
pub use disk::DiskCache;
pub use memory::InMemoryCache;
