//! Cache lookup configuration

use serde::{Deserialize, Serialize};

use super::policy::AssignmentPolicy;
use crate::domain::DomainError;

/// Configuration for cache inserts and lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Minimum similarity for a hit (inclusive)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Policy for tables created without an explicit one
    #[serde(default)]
    pub assignment_policy: AssignmentPolicy,
}

fn default_similarity_threshold() -> f32 {
    0.9
}

/// Thresholds are cosine similarities: finite and within `[-1, 1]`
pub fn is_valid_threshold(threshold: f32) -> bool {
    threshold.is_finite() && (-1.0..=1.0).contains(&threshold)
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            assignment_policy: AssignmentPolicy::default(),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold.clamp(-1.0, 1.0);
        self
    }

    pub fn with_assignment_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.assignment_policy = policy;
        self
    }

    /// Reject a loaded threshold that no similarity could meet, or that NaN
    /// would make meaningless
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_valid_threshold(self.similarity_threshold) {
            Ok(())
        } else {
            Err(DomainError::configuration(format!(
                "cache.similarity_threshold must be within [-1, 1], got {}",
                self.similarity_threshold
            )))
        }
    }
}
