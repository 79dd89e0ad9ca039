//! Embedding provider trait definition

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

/// Trait for text embedding providers (Ollama, OpenAI, ...)
///
/// Implementations must reject an empty model or empty input before making a
/// network call, and report every failure as [`DomainError::Embedding`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embeddings for the given input
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Get the default model for this provider
    fn default_model(&self) -> &'static str;
}

#[cfg(test)]
pub mod fake {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::embedding::Embedding;

    /// Provider returning fixed vectors for known texts and counting calls
    #[derive(Debug, Default)]
    pub struct StaticEmbeddingProvider {
        vectors: HashMap<String, Vec<f32>>,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl StaticEmbeddingProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
            self.vectors.insert(text.into(), vector);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EmbeddingProvider for StaticEmbeddingProvider {
        async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            request.validate(self.provider_name())?;

            if let Some(ref error) = self.error {
                return Err(DomainError::embedding(self.provider_name(), error));
            }

            let data = self
                .vectors
                .get(request.input())
                .map(|v| vec![Embedding::new(0, v.clone())])
                .unwrap_or_default();

            Ok(EmbeddingResponse::new(request.model(), data))
        }

        fn provider_name(&self) -> &'static str {
            "static"
        }

        fn default_model(&self) -> &'static str {
            "static-embedding"
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_known_text_returns_vector() {
            let provider = StaticEmbeddingProvider::new().with_vector("hello", vec![1.0, 0.0]);

            let response = provider
                .embed(EmbeddingRequest::new("static-embedding", "hello"))
                .await
                .unwrap();

            assert_eq!(response.embeddings()[0].vector(), &[1.0, 0.0]);
            assert_eq!(provider.calls(), 1);
        }

        #[tokio::test]
        async fn test_unknown_text_returns_no_embeddings() {
            let provider = StaticEmbeddingProvider::new();

            let response = provider
                .embed(EmbeddingRequest::new("static-embedding", "missing"))
                .await
                .unwrap();

            assert!(response.embeddings().is_empty());
        }

        #[tokio::test]
        async fn test_configured_error() {
            let provider = StaticEmbeddingProvider::new().with_error("connection refused");

            let result = provider
                .embed(EmbeddingRequest::new("static-embedding", "hello"))
                .await;

            assert!(matches!(result, Err(DomainError::Embedding { .. })));
            assert_eq!(provider.calls(), 1);
        }
    }
}
