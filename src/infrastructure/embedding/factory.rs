use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::http_client::HttpClient;
use super::ollama::{OllamaEmbeddingProvider, DEFAULT_OLLAMA_BASE_URL};
use super::openai::{OpenAiEmbeddingProvider, DEFAULT_OPENAI_BASE_URL};
use crate::domain::embedding::EmbeddingProvider;
use crate::domain::DomainError;

/// Which embedding backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingProviderKind {
    #[default]
    Ollama,
    #[serde(alias = "openai")]
    OpenAi,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    #[serde(default)]
    pub provider: EmbeddingProviderKind,
    /// Overrides the provider's default endpoint
    #[serde(default)]
    pub base_url: Option<String>,
    /// Overrides the provider's default model
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::default(),
            base_url: None,
            model: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EmbeddingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Factory for creating embedding providers
#[derive(Debug)]
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    pub fn create(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>, DomainError> {
        let http_client = HttpClient::with_timeout(config.timeout())?;

        match config.provider {
            EmbeddingProviderKind::Ollama => {
                let base_url = config
                    .base_url
                    .as_deref()
                    .unwrap_or(DEFAULT_OLLAMA_BASE_URL);

                Ok(Arc::new(OllamaEmbeddingProvider::with_base_url(
                    http_client,
                    base_url,
                )))
            }

            EmbeddingProviderKind::OpenAi => {
                let api_key = config.api_key.as_deref().ok_or_else(|| {
                    DomainError::configuration("OpenAI embedding provider requires an api_key")
                })?;
                let base_url = config
                    .base_url
                    .as_deref()
                    .unwrap_or(DEFAULT_OPENAI_BASE_URL);

                Ok(Arc::new(OpenAiEmbeddingProvider::with_base_url(
                    http_client,
                    api_key,
                    base_url,
                )))
            }
        }
    }
}
