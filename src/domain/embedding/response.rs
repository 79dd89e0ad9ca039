//! Embedding response types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    /// Index of this embedding in the batch
    index: usize,
    /// The embedding vector
    embedding: Vec<f32>,
}

impl Embedding {
    /// Create a new embedding
    pub fn new(index: usize, embedding: Vec<f32>) -> Self {
        Self { index, embedding }
    }

    /// Get the index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the embedding vector
    pub fn vector(&self) -> &[f32] {
        &self.embedding
    }

    /// Get the embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }

    /// Consume and return the vector
    pub fn into_vector(self) -> Vec<f32> {
        self.embedding
    }
}

/// Response from an embedding request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    model: String,
    data: Vec<Embedding>,
}

impl EmbeddingResponse {
    /// Create a new embedding response
    pub fn new(model: impl Into<String>, data: Vec<Embedding>) -> Self {
        Self {
            model: model.into(),
            data,
        }
    }

    /// Get the model used
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get all embeddings
    pub fn embeddings(&self) -> &[Embedding] {
        &self.data
    }

    /// Take the first vector, failing when the provider returned nothing usable
    pub fn into_first_vector(self, provider: &str) -> Result<Vec<f32>, DomainError> {
        let vector = self
            .data
            .into_iter()
            .next()
            .map(Embedding::into_vector)
            .ok_or_else(|| DomainError::embedding(provider, "no embeddings returned"))?;

        if vector.is_empty() {
            return Err(DomainError::embedding(provider, "empty embedding vector"));
        }

        Ok(vector)
    }
}
