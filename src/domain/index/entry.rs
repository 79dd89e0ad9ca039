//! Cached values and the entries that hold them

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-table row identifier, allocated in insertion order starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The text an answer was cached under plus arbitrary metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedValue {
    text: String,
    #[serde(default)]
    metadata: Map<String, Value>,
}

impl CachedValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }
}

/// A stored value together with its embedding
#[derive(Debug, Clone)]
pub struct Entry {
    id: RowId,
    value: CachedValue,
    vector: Vec<f32>,
    inserted_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(id: RowId, value: CachedValue, vector: Vec<f32>) -> Self {
        Self {
            id,
            value,
            vector,
            inserted_at: Utc::now(),
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn value(&self) -> &CachedValue {
        &self.value
    }

    pub fn vector(&self) -> &[f32] {
        &self.vector
    }

    pub fn inserted_at(&self) -> DateTime<Utc> {
        self.inserted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_value_metadata() {
        let value = CachedValue::new("capital of france")
            .with_field("answer", Value::String("Paris".into()));

        assert_eq!(value.text(), "capital of france");
        assert_eq!(value.metadata()["answer"], "Paris");
    }

    #[test]
    fn test_cached_value_deserializes_without_metadata() {
        let value: CachedValue = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();

        assert_eq!(value.text(), "hello");
        assert!(value.metadata().is_empty());
    }

    #[test]
    fn test_row_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&RowId::new(7)).unwrap(), "7");
        assert_eq!(RowId::new(7).to_string(), "7");
    }
}
