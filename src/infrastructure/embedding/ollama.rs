//! Ollama embedding provider (`POST /api/embed`)

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::HttpClientTrait;
use crate::domain::embedding::{
    Embedding, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse,
};
use crate::domain::DomainError;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "nomic-embed-text:latest";

/// Ollama embedding provider
#[derive(Debug)]
pub struct OllamaEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> OllamaEmbeddingProvider<C> {
    /// Create a provider talking to a local Ollama daemon
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_OLLAMA_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    fn embed_url(&self) -> String {
        format!("{}/api/embed", self.base_url)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<EmbeddingResponse, DomainError> {
        let response: OllamaEmbedResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::embedding("ollama", format!("Failed to parse embedding response: {}", e))
        })?;

        let data = response
            .embeddings
            .into_iter()
            .enumerate()
            .map(|(index, vector)| Embedding::new(index, vector))
            .collect();

        Ok(EmbeddingResponse::new(response.model, data))
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OllamaEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        request.validate(self.provider_name())?;

        let body = serde_json::json!({
            "model": request.model(),
            "input": request.input(),
        });

        debug!(model = %request.model(), "Requesting Ollama embedding");

        let response = self
            .client
            .post_json(
                &self.embed_url(),
                vec![("Content-Type", "application/json")],
                &body,
            )
            .await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn default_model(&self) -> &'static str {
        DEFAULT_OLLAMA_MODEL
    }
}

#[derive(Debug, Deserialize)]
struct OllamaEmbedResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    embeddings: Vec<Vec<f32>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::embedding::{HttpClient, MockHttpClient};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_URL: &str = "http://localhost:11434/api/embed";

    #[tokio::test]
    async fn test_embed_single_text() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({
                "model": DEFAULT_OLLAMA_MODEL,
                "embeddings": [[0.1, 0.2, 0.3]]
            }),
        );
        let provider = OllamaEmbeddingProvider::new(client);

        let response = provider
            .embed(EmbeddingRequest::new(DEFAULT_OLLAMA_MODEL, "why is the sky blue?"))
            .await
            .unwrap();

        assert_eq!(response.model(), DEFAULT_OLLAMA_MODEL);
        assert_eq!(response.embeddings()[0].vector(), &[0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_request_body() {
        let client = MockHttpClient::new()
            .with_response(TEST_URL, serde_json::json!({"model": "m", "embeddings": [[1.0]]}));
        let provider = OllamaEmbeddingProvider::new(client);

        provider
            .embed(EmbeddingRequest::new("m", "hello"))
            .await
            .unwrap();

        let requests = provider.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, TEST_URL);
        assert_eq!(
            requests[0].1,
            serde_json::json!({"model": "m", "input": "hello"})
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_makes_no_request() {
        let provider = OllamaEmbeddingProvider::new(MockHttpClient::new());

        let result = provider.embed(EmbeddingRequest::new("m", "")).await;

        assert!(matches!(result, Err(DomainError::Embedding { .. })));
        assert!(provider.client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_no_embeddings_returned() {
        let client = MockHttpClient::new()
            .with_response(TEST_URL, serde_json::json!({"model": "m", "embeddings": []}));
        let provider = OllamaEmbeddingProvider::new(client);

        let response = provider
            .embed(EmbeddingRequest::new("m", "hello"))
            .await
            .unwrap();

        assert!(response.into_first_vector("ollama").is_err());
    }

    #[tokio::test]
    async fn test_embed_error() {
        let client = MockHttpClient::new().with_error(TEST_URL, "connection refused");
        let provider = OllamaEmbeddingProvider::new(client);

        let result = provider.embed(EmbeddingRequest::new("m", "hello")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_against_http_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embed"))
            .and(body_json(serde_json::json!({"model": "m", "input": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "m",
                "embeddings": [[0.5, -0.5]]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OllamaEmbeddingProvider::with_base_url(HttpClient::new(), server.uri());
        let vector = provider
            .embed(EmbeddingRequest::new("m", "hi"))
            .await
            .unwrap()
            .into_first_vector("ollama")
            .unwrap();

        assert_eq!(vector, vec![0.5, -0.5]);
    }

    #[test]
    fn test_provider_info() {
        let provider = OllamaEmbeddingProvider::with_base_url(MockHttpClient::new(), "http://h:1/");

        assert_eq!(provider.provider_name(), "ollama");
        assert_eq!(provider.default_model(), DEFAULT_OLLAMA_MODEL);
        assert_eq!(provider.embed_url(), "http://h:1/api/embed");
    }
}
