// Remote gitmoji loader.
// Fetches the reference list over HTTP and decodes it into gitmoji entries.

use std::future::Future;

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, info};

use crate::error::{GitmojiError, Result};

use super::types::{Gitmoji, RemoteDataset};

/// Default location of the authoritative gitmoji list.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/carloscuesta/gitmoji/master/packages/gitmojis/src/gitmojis.json";

const PROGRESS_NOTICE: &str = "🌐  Fetching list of gitmoji...";

/// Something that can fetch the gitmoji list from a source URL.
pub trait RemoteLoader {
    /// Fetch and decode the full gitmoji list from `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<Gitmoji>>> + Send;
}

/// HTTP implementation of [`RemoteLoader`].
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: Client,
    quiet: bool,
}

impl HttpLoader {
    /// Create a loader with its own HTTP client.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gitmoji-cache/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GitmojiError::Client)?;

        Ok(Self::with_client(client))
    }

    /// Create a loader around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            quiet: false,
        }
    }

    /// Suppress the progress notice printed before each fetch.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    async fn download(&self, url: &str) -> Result<Vec<Gitmoji>> {
        if !self.quiet {
            eprintln!("{PROGRESS_NOTICE}");
        }
        info!(url, "fetching gitmoji list");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| GitmojiError::Transport {
                url: url.to_string(),
                source,
            })?;

        match response.status() {
            StatusCode::OK => {}
            status => {
                return Err(GitmojiError::HttpStatus {
                    url: url.to_string(),
                    status,
                });
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GitmojiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let dataset: RemoteDataset =
            serde_json::from_slice(&body).map_err(|source| GitmojiError::Decode {
                url: url.to_string(),
                source,
            })?;

        debug!(count = dataset.gitmojis.len(), "decoded gitmoji list");
        Ok(dataset.gitmojis)
    }
}

impl RemoteLoader for HttpLoader {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<Gitmoji>>> + Send {
        self.download(url)
    }
}
