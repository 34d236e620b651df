//! In-memory cache implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;
use wbdata_core::{CacheEntry, FetchCache, FetchError, Result};

/// Simple in-memory cache for testing and development.
///
/// Entries live in a `Mutex`-protected `HashMap` and are lost when the cache
/// is dropped; [`FetchCache::sync`] is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FetchCache for InMemoryCache {
    fn get(&self, key: &str) -> Result<CacheEntry> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| FetchError::Cache(e.to_string()))?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| FetchError::KeyNotFound(key.to_string()))
    }

    fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|m| m.contains_key(key))
            .unwrap_or(false)
    }

    fn set(&self, key: &str, entry: CacheEntry) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| FetchError::Cache(e.to_string()))?;
        entries.insert(key.to_string(), entry);
        debug!("Cached entry for {key}");
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let cache = InMemoryCache::new();
        assert!(matches!(
            cache.get("http://example.com/a"),
            Err(FetchError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_set_then_get() {
        let cache = InMemoryCache::new();
        let entry = CacheEntry::new(9000, Some("body".to_string()));
        cache.set("http://example.com/a", entry.clone()).unwrap();
        assert!(cache.contains("http://example.com/a"));
        assert_eq!(cache.get("http://example.com/a").unwrap(), entry);
    }

    #[test]
    fn test_overwrite() {
        let cache = InMemoryCache::new();
        let key = "http://example.com/a";
        cache.set(key, CacheEntry::new(9000, None)).unwrap();
        cache
            .set(key, CacheEntry::new(9001, Some("fresh".to_string())))
            .unwrap();
        assert_eq!(cache.get(key).unwrap().fetched_day, 9001);
    }
}
