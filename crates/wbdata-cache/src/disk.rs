//! Persistent single-file cache implementation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::{debug, warn};
use wbdata_core::{CacheEntry, FetchCache, FetchError, Result};

/// Qualifier passed to [`ProjectDirs`] for the default cache location.
const APP_NAME: &str = "wbdata";

/// File name of the cache inside the application cache directory.
const CACHE_FILE: &str = "cache";

/// Persistent cache backed by a single JSON file.
///
/// The whole mapping is loaded once at construction and re-serialized to
/// disk on every write (write-through, no batching). Writes go to a sibling
/// temp file which is renamed over the cache file, so a crash mid-write
/// never leaves a truncated cache behind.
///
/// A single process is assumed to own a given cache path; there is no file
/// locking, and concurrent writers from separate processes can clobber each
/// other's updates.
#[derive(Debug)]
pub struct DiskCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl DiskCache {
    /// Open the cache at the platform-default location.
    ///
    /// On Linux this is `$XDG_CACHE_HOME/wbdata/cache` (falling back to
    /// `~/.cache/wbdata/cache`), with the equivalent per-user cache root on
    /// macOS and Windows. Parent directories are created if missing.
    ///
    /// # Errors
    /// Returns an error if no per-user cache directory can be determined or
    /// it cannot be created.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| FetchError::Cache("no usable cache directory".to_string()))?;
        Self::open(dirs.cache_dir().join(CACHE_FILE))
    }

    /// Open the cache at an explicit path.
    ///
    /// Useful for testing or when a specific location is needed. Parent
    /// directories are created if missing. An absent or unreadable file
    /// starts the cache empty; a present file with undecodable or
    /// wrong-shaped content is discarded and the cache also starts empty
    /// (see [`Self::open_default`] for the default location).
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FetchError::Cache(e.to_string()))?;
        }
        let entries = load_or_discard(&path);
        debug!("Opened cache at {} with {} entries", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FetchCache for DiskCache {
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
        {
            let mut entries = self
                .entries
                .lock()
                .map_err(|e| FetchError::Cache(e.to_string()))?;
            entries.insert(key.to_string(), entry);
        }
        self.sync()
    }

    fn sync(&self) -> Result<()> {
        let serialized = {
            let entries = self
                .entries
                .lock()
                .map_err(|e| FetchError::Cache(e.to_string()))?;
            serde_json::to_string(&*entries).map_err(|e| FetchError::Cache(e.to_string()))?
        };
        // Write-to-temp-then-rename so a crash mid-write cannot truncate
        // the live cache file.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serialized).map_err(|e| FetchError::Cache(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| FetchError::Cache(e.to_string()))?;
        Ok(())
    }
}

/// Load the mapping from disk, discarding the file wholesale on corrupt or
/// incompatible content.
///
/// An absent or unreadable file is an empty cache, not an error. A readable
/// file must decode to a JSON object whose sampled first value is an array
/// carrying an integer day-count tag in its first position; anything else is
/// treated as a cache written by an incompatible format and deleted.
fn load_or_discard(path: &Path) -> HashMap<String, CacheEntry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("No readable cache at {}: {e}", path.display());
            return HashMap::new();
        }
    };
    match decode(&raw) {
        Some(entries) => entries,
        None => {
            warn!(
                "Discarding corrupt or incompatible cache file {}",
                path.display()
            );
            if let Err(e) = fs::remove_file(path) {
                warn!("Could not remove corrupt cache file: {e}");
            }
            HashMap::new()
        }
    }
}

/// Decode the cache file content, returning `None` on any shape violation.
fn decode(raw: &str) -> Option<HashMap<String, CacheEntry>> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let object = value.as_object()?;
    // Sample one entry: its value must be a pair tagged with an integer
    // day-count. A failed check means the file was written by an
    // incompatible format version.
    if let Some(sample) = object.values().next() {
        let pair = sample.as_array()?;
        pair.first()?.as_i64()?;
    }
    serde_json::from_value(value).ok()
}
