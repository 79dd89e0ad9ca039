use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Database '{name}' not found")]
    DatabaseNotFound { name: String },

    #[error("Table '{name}' not found")]
    TableNotFound { name: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Embedding error: {provider} - {message}")]
    Embedding { provider: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn database_not_found(name: impl Into<String>) -> Self {
        Self::DatabaseNotFound { name: name.into() }
    }

    pub fn table_not_found(name: impl Into<String>) -> Self {
        Self::TableNotFound { name: name.into() }
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    pub fn embedding(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Embedding {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the "create it, then retry" family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DatabaseNotFound { .. } | Self::TableNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_found_error() {
        let error = DomainError::table_not_found("answers");
        assert_eq!(error.to_string(), "Table 'answers' not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_dimension_mismatch_error() {
        let error = DomainError::dimension_mismatch(3, 4);
        assert_eq!(error.to_string(), "Dimension mismatch: expected 3, got 4");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_embedding_error() {
        let error = DomainError::embedding("ollama", "no embeddings returned");
        assert_eq!(
            error.to_string(),
            "Embedding error: ollama - no embeddings returned"
        );
    }

    #[test]
    fn test_already_exists_error() {
        let error = DomainError::already_exists("Database 'docs' already exists");
        assert_eq!(
            error.to_string(),
            "Already exists: Database 'docs' already exists"
        );
        assert!(!error.is_not_found());
    }
}
