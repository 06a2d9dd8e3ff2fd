//! Error types for the paper-trail core.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. One enum per layer: search, store, agents.

/// Errors from the bibliographic search client.
///
/// The pipeline treats every variant as exhaustion of the current year
/// partition: the failure is logged and the search moves on to the next
/// year. Nothing here aborts a whole run.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service error ({status}): {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body or message.
        message: String,
    },

    /// The Atom feed could not be parsed.
    #[error("feed parse error: {0}")]
    Feed(#[from] quick_xml::Error),
}

impl SearchError {
    /// Create a service error from a status code and body.
    #[must_use]
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service { status, message: message.into() }
    }
}

/// Errors from the paper store.
///
/// Callers surface these as retrieval failures without automatic retry;
/// retry policy belongs to the caller, not this layer.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The backing connection could not be established or a read/write
    /// round-trip failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be mapped back into a paper.
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a malformed-record error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

impl From<neo4rs::Error> for StoreError {
    fn from(err: neo4rs::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

impl From<neo4rs::DeError> for StoreError {
    fn from(err: neo4rs::DeError) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Errors from the generation and extraction agents.
#[derive(thiserror::Error, Debug)]
pub enum AgentError {
    /// The language model call failed.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The document could not be downloaded.
    #[error("document fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Text could not be extracted from the document.
    #[error("text extraction failed: {0}")]
    Extraction(String),
}

impl AgentError {
    /// Create a generation error.
    #[must_use]
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Create an extraction error.
    #[must_use]
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }
}

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for agent operations.
pub type AgentResult<T> = Result<T, AgentError>;
