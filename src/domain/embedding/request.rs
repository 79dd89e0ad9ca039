//! Embedding request types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Request to embed a single text with a given model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    model: String,
    input: String,
}

impl EmbeddingRequest {
    /// Create a new embedding request
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
        }
    }

    /// Get the model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Reject requests that must never reach the network.
    ///
    /// `provider` names the provider in the resulting error.
    pub fn validate(&self, provider: &str) -> Result<(), DomainError> {
        if self.input.is_empty() || self.model.is_empty() {
            return Err(DomainError::embedding(
                provider,
                "empty prompt or model is not allowed",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_request_accessors() {
        let request = EmbeddingRequest::new("nomic-embed-text:latest", "what is rust?");

        assert_eq!(request.model(), "nomic-embed-text:latest");
        assert_eq!(request.input(), "what is rust?");
        assert!(request.validate("ollama").is_ok());
    }

    #[test]
    fn test_empty_input_rejected() {
        let request = EmbeddingRequest::new("nomic-embed-text:latest", "");

        let err = request.validate("ollama").unwrap_err();
        assert!(matches!(err, DomainError::Embedding { .. }));
    }

    #[test]
    fn test_empty_model_rejected() {
        let request = EmbeddingRequest::new("", "hello");

        assert!(request.validate("ollama").is_err());
    }
}
