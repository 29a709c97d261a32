// Fetch-or-reuse controller for the gitmoji cache.
// Serves the cached list while fresh and refreshes it from the remote source otherwise.

use tracing::{debug, info, warn};

use crate::config::CacheConfig;
use crate::error::Result;
use crate::remote::{Gitmoji, HttpLoader, RemoteLoader};

use super::store::{CacheRecord, EntryStore};

/// Gitmoji list backed by a local cache file and a remote loader.
#[derive(Debug, Clone)]
pub struct GitmojiCache<L = HttpLoader> {
    store: EntryStore,
    loader: L,
    source_url: String,
}

impl GitmojiCache<HttpLoader> {
    /// Create a cache that fetches over HTTP.
    pub fn new(config: CacheConfig) -> Result<Self> {
        Ok(Self::with_loader(config, HttpLoader::new()?))
    }
}

impl<L: RemoteLoader> GitmojiCache<L> {
    /// Create a cache that fetches through `loader`.
    pub fn with_loader(config: CacheConfig, loader: L) -> Self {
        Self {
            store: EntryStore::new(config.cache_file),
            loader,
            source_url: config.source_url,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Get the gitmoji list, from the cache file when it is usable and fresh.
    ///
    /// A missing or unreadable cache file, or one older than
    /// [`STALE_AFTER`](super::STALE_AFTER), is refreshed from the remote source
    /// and rewritten. A cache file that cannot be parsed is reported as an error
    /// and left untouched.
    pub async fn get_entries(&self) -> Result<Vec<Gitmoji>> {
        match self.store.read() {
            Ok(record) if record.is_stale() => {
                info!(modified = ?record.modified, "gitmoji cache is stale");
                self.refresh().await
            }
            Ok(record) => {
                debug!(count = record.gitmoji.len(), "serving gitmoji from cache");
                Ok(record.gitmoji)
            }
            Err(err) if err.is_cache_miss() => {
                debug!(error = %err, "gitmoji cache unavailable");
                self.refresh().await
            }
            Err(err) => {
                warn!(error = %err, "refusing to overwrite malformed gitmoji cache");
                Err(err)
            }
        }
    }

    /// Fetch the list from the remote source and persist it.
    async fn refresh(&self) -> Result<Vec<Gitmoji>> {
        let gitmoji = self.loader.fetch(&self.source_url).await?;
        let record = CacheRecord::fetched(gitmoji);
        self.store.write(&record)?;

        info!(count = record.gitmoji.len(), "refreshed gitmoji cache");
        Ok(record.gitmoji)
    }
}

/// Resolve the gitmoji list using the default cache location and source.
pub async fn get_gitmoji() -> Result<Vec<Gitmoji>> {
    let config = CacheConfig::from_home()?;
    GitmojiCache::new(config)?.get_entries().await
}
