//! Document text extraction.

use async_trait::async_trait;
use lopdf::Document;

use crate::config::Config;
use crate::error::{AgentError, AgentResult};

/// Opaque text extraction given a document locator.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Download the document at `locator` and return its text content.
    async fn extract_text(&self, locator: &str) -> AgentResult<String>;
}

/// Extractor for PDF documents fetched over HTTP.
pub struct PdfTextExtractor {
    http: reqwest::Client,
}

impl PdfTextExtractor {
    /// Create an extractor with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, locator: &str) -> AgentResult<String> {
        if !locator.ends_with(".pdf") {
            return Err(AgentError::extraction(format!(
                "unrecognized document suffix: {locator}"
            )));
        }

        let response = self.http.get(locator).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let document = Document::load_mem(&bytes)
            .map_err(|err| AgentError::extraction(err.to_string()))?;
        let pages: Vec<u32> = document.get_pages().keys().copied().collect();
        document
            .extract_text(&pages)
            .map_err(|err| AgentError::extraction(err.to_string()))
    }
}

impl std::fmt::Debug for PdfTextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfTextExtractor").finish_non_exhaustive()
    }
}
