#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wbdata-rs/wbdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Cached, paginated fetch layer for the World Bank indicator API.
//!
//! This crate ties the pieces together: it re-exports the core types and
//! cache backends and provides the [`Fetcher`], the sole entry point used by
//! ETL and analysis callers.
//!
//! The composition root constructs one cache and one [`Fetcher`] and passes
//! them down; there is no process-wide singleton, so tests can substitute an
//! [`InMemoryCache`] or a temp-path [`DiskCache`] freely.

// Core types and traits
pub use wbdata_core::*;

// Cache implementations
pub use wbdata_cache::{DiskCache, InMemoryCache};

mod fetcher;
mod transport;

pub use fetcher::{Fetcher, PER_PAGE, TRIES};
pub use transport::{HttpTransport, Transport};
