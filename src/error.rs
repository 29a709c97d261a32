// Error types for the gitmoji cache.
// Separates cache-file failures, remote fetch failures, and persistence failures.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitmojiError {
    #[error("gitmoji cache not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read gitmoji cache {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed gitmoji cache {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to download gitmoji list (from {url}): {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unable to download gitmoji list (from {url}): HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("unable to decode gitmoji list (from {url}): {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to write gitmoji cache {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine home directory")]
    HomeDirUnavailable,

    #[error("unable to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GitmojiError {
    /// Whether this error means the cache could not be used and a refresh is warranted.
    ///
    /// A malformed cache is deliberately not a miss.
    pub fn is_cache_miss(&self) -> bool {
        matches!(
            self,
            GitmojiError::NotFound { .. } | GitmojiError::Unreadable { .. }
        )
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GitmojiError::HttpStatus { status, .. } => Some(*status),
            GitmojiError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitmojiError>;
