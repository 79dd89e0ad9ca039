//! Query-string routes kept for clients of the first HTTP surface.
//!
//! Parameter names accept both the snake_case form and the capitalized form
//! those clients send.

use axum::{
    extract::State,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, InsertRowResponse, Json, Query};
use crate::domain::{CachedValue, QueryOutcome};

#[derive(Debug, Deserialize)]
pub struct CreateDbParams {
    #[serde(alias = "Name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTableParams {
    #[serde(alias = "DB")]
    pub db: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Capacity")]
    pub capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct RowParams {
    #[serde(alias = "DBName")]
    pub db_name: String,
    #[serde(alias = "TableName")]
    pub table_name: String,
    #[serde(alias = "Query")]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `val` is the cached text on a hit and null on a miss
#[derive(Debug, Serialize)]
pub struct LegacyQueryResponse {
    pub val: Option<String>,
    pub hit: bool,
    pub similarity: Option<f32>,
}

impl From<QueryOutcome> for LegacyQueryResponse {
    fn from(outcome: QueryOutcome) -> Self {
        let similarity = outcome.similarity();

        match outcome {
            QueryOutcome::Hit(hit) => Self {
                val: Some(hit.value.text().to_string()),
                hit: true,
                similarity,
            },
            QueryOutcome::Miss { .. } => Self {
                val: None,
                hit: false,
                similarity,
            },
        }
    }
}

pub fn create_legacy_router() -> Router<AppState> {
    Router::new()
        .route("/createdb", post(create_db))
        .route("/createtable", post(create_table))
        .route("/insert", post(insert))
        .route("/query", post(query))
}

/// POST /createdb?name=
pub async fn create_db(
    State(state): State<AppState>,
    Query(params): Query<CreateDbParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(database = %params.name, "Creating database (legacy)");

    state.cache_service.create_database(&params.name)?;

    Ok(Json(MessageResponse {
        message: "create successfully".to_string(),
    }))
}

/// POST /createtable?db=&name=&capacity=
pub async fn create_table(
    State(state): State<AppState>,
    Query(params): Query<CreateTableParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(
        database = %params.db,
        table = %params.name,
        capacity = params.capacity,
        "Creating table (legacy)"
    );

    state
        .cache_service
        .create_table(&params.db, &params.name, params.capacity, None)?;

    Ok(Json(MessageResponse {
        message: "create table successfully".to_string(),
    }))
}

/// POST /insert?db_name=&table_name=&query=
pub async fn insert(
    State(state): State<AppState>,
    Query(params): Query<RowParams>,
) -> Result<Json<InsertRowResponse>, ApiError> {
    let receipt = state
        .cache_service
        .insert(
            &params.db_name,
            &params.table_name,
            CachedValue::new(params.query),
        )
        .await?;

    Ok(Json(receipt.into()))
}

/// POST /query?db_name=&table_name=&query=
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<RowParams>,
) -> Result<Json<LegacyQueryResponse>, ApiError> {
    let outcome = state
        .cache_service
        .query(&params.db_name, &params.table_name, &params.query, None)
        .await?;

    Ok(Json(outcome.into()))
}
