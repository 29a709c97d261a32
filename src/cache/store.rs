// Cache store for reading and writing the gitmoji cache file.
// Handles JSON serialization, staleness checking, and atomic file replacement.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GitmojiError, Result};
use crate::remote::Gitmoji;

use super::paths::temp_path;

/// Age after which a cached list is refreshed: 30 days.
pub const STALE_AFTER: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[cfg(unix)]
const DIR_MODE: u32 = 0o750;
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// On-disk contents of the cache file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Cached entries, in the order the remote source returned them.
    #[serde(default)]
    pub gitmoji: Vec<Gitmoji>,
    /// When the entries were last fetched from the remote source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl CacheRecord {
    /// Build a record from a successful fetch, stamped with the current time.
    pub fn fetched(gitmoji: Vec<Gitmoji>) -> Self {
        Self {
            gitmoji,
            modified: Some(Utc::now()),
        }
    }

    /// Check if the record is older than [`STALE_AFTER`] at `now`.
    ///
    /// Records that were never stamped by a fetch are not considered stale.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        let Some(modified) = self.modified else {
            return false;
        };

        let elapsed = now
            .signed_duration_since(modified)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed > STALE_AFTER
    }

    /// Check if the record is stale right now.
    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }
}

/// Reads and writes the cache file at a fixed path.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the cache file.
    pub fn read(&self) -> Result<CacheRecord> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GitmojiError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(GitmojiError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let record: CacheRecord =
            serde_json::from_slice(&contents).map_err(|source| GitmojiError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            count = record.gitmoji.len(),
            "read gitmoji cache"
        );
        Ok(record)
    }

    /// Replace the cache file with `record`.
    pub fn write(&self, record: &CacheRecord) -> Result<()> {
        self.replace(record)
            .map_err(|source| GitmojiError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            count = record.gitmoji.len(),
            "wrote gitmoji cache"
        );
        Ok(())
    }

    fn replace(&self, record: &CacheRecord) -> io::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir(parent)?;
        }

        let json = serde_json::to_string_pretty(record)?;

        // Write atomically via temp file
        let temp_path = temp_path(&self.path);
        let result = write_file(&temp_path, json.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;

    // A leftover temp file keeps its old mode; reset it.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    }

    file.write_all(bytes)?;
    file.sync_all()
}
