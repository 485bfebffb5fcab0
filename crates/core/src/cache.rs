//! Prior-run cache
//!
//! Remembers the modification time and size of files that were well
//! formatted at the end of a previous run. A file whose metadata still
//! matches is reported as [`Outcome::CachedUnchanged`](crate::Outcome)
//! without invoking the formatter again.
//!
//! The cache is stored as JSON and tied to the formatter command line: a
//! different command invalidates every entry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Current cache file format version
pub const CACHE_VERSION: u32 = 1;

/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV: &str = "BR_CACHE_DIR";

/// Metadata recorded for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub modified: Timestamp,
    pub size: u64,
}

impl CacheEntry {
    /// Read the entry for a file from disk
    pub fn stat(file: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(file)?;
        let modified = Timestamp::try_from(metadata.modified()?)
            .map_err(|e| Error::General(format!("Invalid modification time: {e}")))?;
        Ok(Self {
            modified,
            size: metadata.len(),
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    version: u32,
    formatter: String,
    #[serde(default)]
    files: BTreeMap<PathBuf, CacheEntry>,
}

/// Cache of files known to be well formatted
#[derive(Debug, Default)]
pub struct Cache {
    location: Option<PathBuf>,
    formatter: String,
    files: BTreeMap<PathBuf, CacheEntry>,
}

impl Cache {
    /// A cache that never hits and is never written
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Default cache file location
    ///
    /// `$BR_CACHE_DIR/cache.json` if set, otherwise under the user cache dir.
    pub fn default_location() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CACHE_DIR_ENV) {
            return Some(PathBuf::from(dir).join("cache.json"));
        }
        dirs::cache_dir().map(|dir| dir.join("black-report").join("cache.json"))
    }

    /// Load the cache for `formatter` from `location`.
    ///
    /// A missing, unreadable or outdated cache file yields an empty cache.
    pub fn load(location: PathBuf, formatter: &str) -> Self {
        let mut cache = Self {
            location: Some(location),
            formatter: formatter.to_string(),
            files: BTreeMap::new(),
        };

        let Some(location) = cache.location.as_deref() else {
            return cache;
        };
        if !location.exists() {
            return cache;
        }

        match read_cache_file(location) {
            Ok(file) if file.version == CACHE_VERSION && file.formatter == formatter => {
                debug!(entries = file.files.len(), path = %location.display(), "cache loaded");
                cache.files = file.files;
            }
            Ok(_) => debug!(path = %location.display(), "cache outdated, starting fresh"),
            Err(e) => warn!(path = %location.display(), "ignoring unreadable cache: {e}"),
        }
        cache
    }

    pub fn is_enabled(&self) -> bool {
        self.location.is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether the file still matches its recorded metadata
    pub fn is_unchanged(&self, file: &Path) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(entry) = self.files.get(&cache_key(file)) else {
            return false;
        };
        match CacheEntry::stat(file) {
            Ok(current) => current == *entry,
            Err(_) => false,
        }
    }

    /// Record the file's current metadata as well formatted
    pub fn mark(&mut self, file: &Path) {
        if !self.is_enabled() {
            return;
        }
        match CacheEntry::stat(file) {
            Ok(entry) => {
                self.files.insert(cache_key(file), entry);
            }
            Err(e) => warn!(path = %file.display(), "cannot cache file: {e}"),
        }
    }

    /// Write the cache back to disk
    pub fn save(&self) -> Result<()> {
        let Some(location) = &self.location else {
            return Ok(());
        };
        if let Some(parent) = location.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = CacheFile {
            version: CACHE_VERSION,
            formatter: self.formatter.clone(),
            files: self.files.clone(),
        };
        std::fs::write(location, serde_json::to_string(&file)?)?;
        debug!(entries = self.files.len(), path = %location.display(), "cache saved");
        Ok(())
    }
}

fn read_cache_file(location: &Path) -> Result<CacheFile> {
    let content = std::fs::read_to_string(location)?;
    Ok(serde_json::from_str(&content)?)
}

fn cache_key(file: &Path) -> PathBuf {
    std::fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf())
}
