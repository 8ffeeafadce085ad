//! HTTP client for the iTunes Search API.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::error::FetchError;

/// Abstraction over the upstream catalog so the query layer can be driven
/// by a fake in tests.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search artists by name, returning the raw response body.
    async fn search(&self, term: &str) -> Result<String, FetchError>;

    /// Look up an artist's albums by artist id, returning the raw response body.
    async fn lookup(&self, artist_id: &str) -> Result<String, FetchError>;
}

/// Client for the two iTunes endpoints this server proxies.
///
/// URLs are built from `%s` templates configured at startup; the caller
/// supplied term is percent-encoded before substitution.
pub struct ItunesClient {
    client: reqwest::Client,
    search_url_template: String,
    lookup_url_template: String,
}

impl ItunesClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `search_url_template` - search URL with a `%s` placeholder for the term
    /// * `lookup_url_template` - lookup URL with a `%s` placeholder for the artist id
    /// * `timeout_sec` - per-request timeout in seconds
    pub fn new(
        search_url_template: String,
        lookup_url_template: String,
        timeout_sec: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self {
            client,
            search_url_template,
            lookup_url_template,
        })
    }

    fn build_url(template: &str, term: &str) -> String {
        template.replacen("%s", &urlencoding::encode(term), 1)
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response.text().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(err.to_string())
            }
        })
    }
}

#[async_trait]
impl CatalogClient for ItunesClient {
    async fn search(&self, term: &str) -> Result<String, FetchError> {
        let url = Self::build_url(&self.search_url_template, term);
        self.fetch(&url).await
    }

    async fn lookup(&self, artist_id: &str) -> Result<String, FetchError> {
        let url = Self::build_url(&self.lookup_url_template, artist_id);
        self.fetch(&url).await
    }
}
