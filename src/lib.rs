//! Locally cached lookup of the gitmoji reference list.
//!
//! The list is read from `~/.config/gitmoji-cache/gitmoji.json` when it is
//! present and younger than 30 days, and fetched from the upstream gitmoji
//! repository otherwise.

pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod remote;

pub use cache::{CacheRecord, EntryStore, GitmojiCache, STALE_AFTER, get_gitmoji};
pub use config::CacheConfig;
pub use error::{GitmojiError, Result};
pub use lookup::{find_by_code, find_by_name};
pub use remote::{DEFAULT_SOURCE_URL, Gitmoji, HttpLoader, RemoteLoader};
