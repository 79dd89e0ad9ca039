//! Fixed-capacity table of layers

use serde::Serialize;

use super::entry::{CachedValue, Entry, RowId};
use super::layer::{best_of, Layer};
use super::outcome::{CacheHit, InsertReceipt, QueryOutcome};
use super::policy::AssignmentPolicy;
use super::similarity::is_finite_vector;
use crate::domain::DomainError;

/// Snapshot of a table's shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    pub name: String,
    pub capacity: u32,
    pub count: u64,
    pub cursor: u32,
    pub dimension: Option<usize>,
    pub policy: AssignmentPolicy,
    pub layer_sizes: Vec<usize>,
}

/// A fixed number of layers plus the insertion cursor.
///
/// `layers.len() == capacity` for the table's whole lifetime. The vector
/// dimension is fixed by the first insert.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    capacity: u32,
    count: u64,
    cursor: u32,
    layers: Vec<Layer>,
    dimension: Option<usize>,
    policy: AssignmentPolicy,
}

impl Table {
    /// Create a table with `capacity` empty layers
    pub fn new(
        name: impl Into<String>,
        capacity: u32,
        policy: AssignmentPolicy,
    ) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::validation("Table capacity must be positive"));
        }

        Ok(Self {
            name: name.into(),
            capacity,
            count: 0,
            cursor: 0,
            layers: (0..capacity).map(|_| Layer::new()).collect(),
            dimension: None,
            policy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Total entries ever inserted
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Next layer a round-robin insert goes to
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn policy(&self) -> AssignmentPolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Store a value under its embedding.
    ///
    /// Either the whole insert applies or nothing changes.
    pub fn insert(
        &mut self,
        value: CachedValue,
        vector: Vec<f32>,
    ) -> Result<InsertReceipt, DomainError> {
        if vector.is_empty() {
            return Err(DomainError::validation("Cannot insert an empty vector"));
        }
        if !is_finite_vector(&vector) {
            return Err(DomainError::validation(
                "Cannot insert a vector with non-finite components",
            ));
        }

        if let Some(expected) = self.dimension {
            if vector.len() != expected {
                return Err(DomainError::dimension_mismatch(expected, vector.len()));
            }
        }

        let layer = self.select_layer(&vector)?;
        let row_id = RowId::new(self.count + 1);
        let dimension = vector.len();

        self.layers[layer].push(Entry::new(row_id, value, vector));

        if self.policy == AssignmentPolicy::RoundRobin {
            self.cursor = (self.cursor + 1) % self.capacity;
        }
        self.count += 1;
        self.dimension = Some(dimension);

        Ok(InsertReceipt { row_id, layer })
    }

    fn select_layer(&self, vector: &[f32]) -> Result<usize, DomainError> {
        match self.policy {
            AssignmentPolicy::RoundRobin => Ok(self.cursor as usize),
            AssignmentPolicy::NearestCentroid => {
                if let Some(empty) = self.layers.iter().position(Layer::is_empty) {
                    return Ok(empty);
                }

                best_of(
                    self.layers
                        .iter()
                        .enumerate()
                        .map(|(i, layer)| layer.centroid_similarity(vector).map(|s| (i, s))),
                )?
                .map(|(index, _)| index)
                .ok_or_else(|| DomainError::internal("Table has no layers"))
            }
        }
    }

    /// Two-stage lookup: closest centroid first, then the closest entry in
    /// that layer. A hit requires `similarity >= threshold`.
    pub fn search(&self, query: &[f32], threshold: f32) -> Result<QueryOutcome, DomainError> {
        if self.is_empty() {
            return Ok(QueryOutcome::empty_miss());
        }

        if let Some(expected) = self.dimension {
            if query.len() != expected {
                return Err(DomainError::dimension_mismatch(expected, query.len()));
            }
        }
        if !is_finite_vector(query) {
            return Err(DomainError::validation(
                "Query vector has non-finite components",
            ));
        }

        let populated = self
            .layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| !layer.is_empty());

        let Some((layer_index, _)) = best_of(
            populated.map(|(i, layer)| layer.centroid_similarity(query).map(|s| (i, s))),
        )?
        else {
            return Ok(QueryOutcome::empty_miss());
        };

        let layer = &self.layers[layer_index];

        let Some((entry_index, similarity)) = layer.best_entry(query)? else {
            return Ok(QueryOutcome::empty_miss());
        };

        // NaN never reaches a hit
        if !(similarity >= threshold) {
            return Ok(QueryOutcome::Miss {
                best_similarity: Some(similarity),
            });
        }

        let entry = &layer.entries()[entry_index];

        Ok(QueryOutcome::Hit(CacheHit {
            value: entry.value().clone(),
            row_id: entry.id(),
            layer: layer_index,
            similarity,
        }))
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            name: self.name.clone(),
            capacity: self.capacity,
            count: self.count,
            cursor: self.cursor,
            dimension: self.dimension,
            policy: self.policy,
            layer_sizes: self.layers.iter().map(Layer::len).collect(),
        }
    }
}
