//! Language-model text generation.

use async_trait::async_trait;
use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;

use crate::config::Config;
use crate::error::{AgentError, AgentResult};

/// Synchronous text-in/text-out generation. No streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the prompt.
    async fn generate(&self, prompt: &str) -> AgentResult<String>;
}

/// Generator backed by a local Ollama instance.
pub struct OllamaGenerator {
    client: Ollama,
    model: String,
}

impl OllamaGenerator {
    /// Create a generator from the configured host, port, and model.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            client: Ollama::new(config.ollama_host.clone(), config.ollama_port),
            model: config.ollama_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> AgentResult<String> {
        let request = GenerationRequest::new(self.model.clone(), prompt.to_string());
        let response = self
            .client
            .generate(request)
            .await
            .map_err(|err| AgentError::generation(err.to_string()))?;
        Ok(response.response)
    }
}

impl std::fmt::Debug for OllamaGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaGenerator").field("model", &self.model).finish_non_exhaustive()
    }
}
