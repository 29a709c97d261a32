// Cache configuration.
// Carries the cache file location and remote source URL into the cache controller.

use std::path::PathBuf;

use crate::cache::paths;
use crate::error::{GitmojiError, Result};
use crate::remote::DEFAULT_SOURCE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Path of the cache file.
    pub cache_file: PathBuf,
    /// URL the gitmoji list is fetched from.
    pub source_url: String,
}

impl CacheConfig {
    pub fn new(cache_file: impl Into<PathBuf>, source_url: impl Into<String>) -> Self {
        Self {
            cache_file: cache_file.into(),
            source_url: source_url.into(),
        }
    }

    /// Default configuration: `~/.config/gitmoji-cache/gitmoji.json` and the upstream list.
    pub fn from_home() -> Result<Self> {
        let cache_file = paths::cache_file_path().ok_or(GitmojiError::HomeDirUnavailable)?;
        Ok(Self::new(cache_file, DEFAULT_SOURCE_URL))
    }

    pub fn with_cache_file(mut self, cache_file: impl Into<PathBuf>) -> Self {
        self.cache_file = cache_file.into();
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }
}
