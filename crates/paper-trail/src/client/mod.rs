//! arXiv query API client.
//!
//! Thin blocking-per-call wrapper over the export API: one GET per batch,
//! Atom response parsed into [`FeedEntry`] records. No caching and no
//! automatic retry; a failed request is the caller's signal to move on.

pub mod feed;

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::{SearchError, SearchResult};
pub use feed::FeedEntry;

/// arXiv query API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with pooled connections.
    http: Client,

    /// Query API endpoint.
    api_url: String,

    /// Results requested per batch.
    page_size: usize,

    /// Polite delay before each request.
    rate_limit_delay: Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            http,
            api_url: config.arxiv_api_url.clone(),
            page_size: config.page_size,
            rate_limit_delay: config.rate_limit_delay,
        })
    }

    /// Results requested per batch.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch one batch of results for a query, sorted by submission date
    /// ascending, starting at the given offset.
    ///
    /// An exhausted query yields an empty batch, not an error.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-success status, or an
    /// unparseable feed.
    pub async fn fetch_batch(&self, query: &str, start: usize) -> SearchResult<Vec<FeedEntry>> {
        tokio::time::sleep(self.rate_limit_delay).await;

        let params = [
            ("search_query", query.to_string()),
            ("start", start.to_string()),
            ("max_results", self.page_size.to_string()),
            ("sortBy", "submittedDate".to_string()),
            ("sortOrder", "ascending".to_string()),
        ];

        let response = self.http.get(&self.api_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::service(status.as_u16(), message));
        }

        let body = response.text().await?;
        feed::parse_feed(&body)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}
