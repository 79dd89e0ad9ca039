//! Insert and query handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, InsertRowRequest, InsertRowResponse, Json, QueryRequest, QueryResponse,
};

/// POST /v1/databases/{database}/tables/{table}/rows
pub async fn insert_row(
    State(state): State<AppState>,
    Path((database, table)): Path<(String, String)>,
    Json(request): Json<InsertRowRequest>,
) -> Result<(StatusCode, Json<InsertRowResponse>), ApiError> {
    debug!(database = %database, table = %table, "Inserting row");

    let receipt = state
        .cache_service
        .insert(&database, &table, request.into_value())
        .await?;

    Ok((StatusCode::CREATED, Json(receipt.into())))
}

/// POST /v1/databases/{database}/tables/{table}/query
pub async fn query_table(
    State(state): State<AppState>,
    Path((database, table)): Path<(String, String)>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    debug!(
        database = %database,
        table = %table,
        threshold = ?request.threshold,
        "Querying table"
    );

    let outcome = state
        .cache_service
        .query(&database, &table, &request.query, request.threshold)
        .await?;

    Ok(Json(outcome.into()))
}
