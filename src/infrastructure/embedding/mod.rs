//! Embedding provider implementations

mod factory;
mod http_client;
mod ollama;
mod openai;

pub use factory::{EmbeddingConfig, EmbeddingProviderFactory, EmbeddingProviderKind};
pub use http_client::{HttpClient, HttpClientTrait};
pub use ollama::{OllamaEmbeddingProvider, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};
pub use openai::{OpenAiEmbeddingProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
