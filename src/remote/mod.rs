// Remote gitmoji source.
// Provides the loader capability and the HTTP client that implements it.

pub mod client;
pub mod types;

pub use client::{DEFAULT_SOURCE_URL, HttpLoader, RemoteLoader};
pub use types::Gitmoji;
