// Cache module for the local gitmoji list.
// Stores the remote reference list on disk and decides when to refresh it.

pub mod controller;
pub mod paths;
pub mod store;

pub use controller::{GitmojiCache, get_gitmoji};
pub use paths::{cache_file_path, config_dir};
pub use store::{CacheRecord, EntryStore, STALE_AFTER};
