//! Results of insert and query operations

use serde::Serialize;

use super::entry::{CachedValue, RowId};

/// Where an insert landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsertReceipt {
    pub row_id: RowId,
    pub layer: usize,
}

/// A cached answer close enough to the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheHit {
    pub value: CachedValue,
    pub row_id: RowId,
    pub layer: usize,
    pub similarity: f32,
}

/// Outcome of a cache lookup.
///
/// A miss never carries the best stored value, only how close it came.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Hit(CacheHit),
    Miss { best_similarity: Option<f32> },
}

impl QueryOutcome {
    /// Miss on a table with nothing to compare against
    pub fn empty_miss() -> Self {
        Self::Miss {
            best_similarity: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn hit(&self) -> Option<&CacheHit> {
        match self {
            Self::Hit(hit) => Some(hit),
            Self::Miss { .. } => None,
        }
    }

    pub fn similarity(&self) -> Option<f32> {
        match self {
            Self::Hit(hit) => Some(hit.similarity),
            Self::Miss { best_similarity } => *best_similarity,
        }
    }
}
