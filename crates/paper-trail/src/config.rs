//! Configuration for the paper-trail services.

use std::time::Duration;

/// Search service constants.
pub mod api {
    use std::time::Duration;

    /// arXiv query API endpoint.
    pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Polite delay between requests (arXiv asks for no more than one
    /// request every three seconds).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(3);

    /// Results requested per batch.
    pub const PAGE_SIZE: usize = 100;

    /// First calendar year covered by a topic search.
    pub const START_YEAR: i32 = 2019;
}

/// Default endpoints for the store and model collaborators.
pub mod defaults {
    /// Neo4j bolt URI.
    pub const NEO4J_URI: &str = "neo4j://localhost:7687";

    /// Neo4j user.
    pub const NEO4J_USER: &str = "neo4j";

    /// Ollama host.
    pub const OLLAMA_HOST: &str = "http://localhost";

    /// Ollama port.
    pub const OLLAMA_PORT: u16 = 11434;

    /// Generation model.
    pub const OLLAMA_MODEL: &str = "llama3.1";

    /// Characters of extracted full text handed to the model as context.
    pub const FULL_TEXT_CONTEXT_CHARS: usize = 2000;
}

/// Service configuration.
///
/// Constructed once at startup and passed into each component; there are no
/// process-global handles.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the arXiv query API (overridable for mock servers).
    pub arxiv_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay between search requests.
    pub rate_limit_delay: Duration,

    /// Results requested per batch.
    pub page_size: usize,

    /// Neo4j bolt URI.
    pub neo4j_uri: String,

    /// Neo4j user.
    pub neo4j_user: String,

    /// Neo4j password.
    pub neo4j_password: String,

    /// Ollama host.
    pub ollama_host: String,

    /// Ollama port.
    pub ollama_port: u16,

    /// Generation model name.
    pub ollama_model: String,
}

impl Config {
    /// Create a configuration with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arxiv_api_url: api::ARXIV_API_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: api::RATE_LIMIT_DELAY,
            page_size: api::PAGE_SIZE,
            neo4j_uri: defaults::NEO4J_URI.to_string(),
            neo4j_user: defaults::NEO4J_USER.to_string(),
            neo4j_password: String::new(),
            ollama_host: defaults::OLLAMA_HOST.to_string(),
            ollama_port: defaults::OLLAMA_PORT,
            ollama_model: defaults::OLLAMA_MODEL.to_string(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            arxiv_api_url: format!("{}/api/query", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            ..Self::new()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognized: `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD`,
    /// `OLLAMA_HOST`, `OLLAMA_PORT`, `OLLAMA_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns error if `OLLAMA_PORT` is set but not a valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(uri) = std::env::var("NEO4J_URI") {
            config.neo4j_uri = uri;
        }
        if let Ok(user) = std::env::var("NEO4J_USER") {
            config.neo4j_user = user;
        }
        if let Ok(password) = std::env::var("NEO4J_PASSWORD") {
            config.neo4j_password = password;
        }
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            config.ollama_host = host;
        }
        if let Ok(port) = std::env::var("OLLAMA_PORT") {
            config.ollama_port = port.parse()?;
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config.ollama_model = model;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.arxiv_api_url, api::ARXIV_API_URL);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.neo4j_uri, defaults::NEO4J_URI);
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.arxiv_api_url, "http://127.0.0.1:9999/api/query");
        assert_eq!(config.rate_limit_delay, Duration::from_millis(0));
    }
}
