//! JSON bodies for databases, tables, rows and queries

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{AssignmentPolicy, CachedValue, InsertReceipt, QueryOutcome, RowId};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDatabaseRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseResponse {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabasesResponse {
    pub databases: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTableRequest {
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub policy: Option<AssignmentPolicy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TablesResponse {
    pub database: String,
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertRowRequest {
    pub text: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl InsertRowRequest {
    pub fn into_value(self) -> CachedValue {
        CachedValue::new(self.text).with_metadata(self.metadata)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InsertRowResponse {
    pub row_id: RowId,
    pub layer: usize,
}

impl From<InsertReceipt> for InsertRowResponse {
    fn from(receipt: InsertReceipt) -> Self {
        Self {
            row_id: receipt.row_id,
            layer: receipt.layer,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default)]
    pub threshold: Option<f32>,
}

/// Hit carries the stored value; miss only how close the best candidate came
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Hit {
        hit: bool,
        value: CachedValue,
        row_id: RowId,
        layer: usize,
        similarity: f32,
    },
    Miss {
        hit: bool,
        best_similarity: Option<f32>,
    },
}

impl From<QueryOutcome> for QueryResponse {
    fn from(outcome: QueryOutcome) -> Self {
        match outcome {
            QueryOutcome::Hit(hit) => Self::Hit {
                hit: true,
                value: hit.value,
                row_id: hit.row_id,
                layer: hit.layer,
                similarity: hit.similarity,
            },
            QueryOutcome::Miss { best_similarity } => Self::Miss {
                hit: false,
                best_similarity,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CacheHit;
    use serde_json::json;

    #[test]
    fn test_hit_serialization() {
        let outcome = QueryOutcome::Hit(CacheHit {
            value: CachedValue::new("answer"),
            row_id: RowId::new(3),
            layer: 1,
            similarity: 1.0,
        });

        let json = serde_json::to_value(QueryResponse::from(outcome)).unwrap();

        assert_eq!(json["hit"], true);
        assert_eq!(json["value"]["text"], "answer");
        assert_eq!(json["row_id"], 3);
        assert_eq!(json["layer"], 1);
        assert!(json.get("best_similarity").is_none());
    }

    #[test]
    fn test_miss_serialization_has_no_value() {
        let outcome = QueryOutcome::Miss {
            best_similarity: Some(0.5),
        };

        let json = serde_json::to_value(QueryResponse::from(outcome)).unwrap();

        assert_eq!(json, json!({"hit": false, "best_similarity": 0.5}));
    }

    #[test]
    fn test_empty_miss_serializes_null_similarity() {
        let json = serde_json::to_value(QueryResponse::from(QueryOutcome::empty_miss())).unwrap();

        assert_eq!(json, json!({"hit": false, "best_similarity": null}));
    }

    #[test]
    fn test_create_table_request_policy_optional() {
        let request: CreateTableRequest =
            serde_json::from_value(json!({"name": "answers", "capacity": 4})).unwrap();
        assert!(request.policy.is_none());

        let request: CreateTableRequest = serde_json::from_value(
            json!({"name": "answers", "capacity": 4, "policy": "nearest_centroid"}),
        )
        .unwrap();
        assert_eq!(request.policy, Some(AssignmentPolicy::NearestCentroid));
    }

    #[test]
    fn test_insert_request_into_value() {
        let request: InsertRowRequest = serde_json::from_value(
            json!({"text": "cached answer", "metadata": {"source": "web"}}),
        )
        .unwrap();

        let value = request.into_value();
        assert_eq!(value.text(), "cached answer");
        assert_eq!(value.metadata()["source"], "web");
    }
}
