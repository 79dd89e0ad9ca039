//! Table endpoint handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateTableRequest, Json, TablesResponse};
use crate::domain::TableStats;

/// GET /v1/databases/{database}/tables
pub async fn list_tables(
    State(state): State<AppState>,
    Path(database): Path<String>,
) -> Result<Json<TablesResponse>, ApiError> {
    debug!(database = %database, "Listing tables");

    let tables = state.cache_service.list_tables(&database)?;

    Ok(Json(TablesResponse { database, tables }))
}

/// POST /v1/databases/{database}/tables
pub async fn create_table(
    State(state): State<AppState>,
    Path(database): Path<String>,
    Json(request): Json<CreateTableRequest>,
) -> Result<(StatusCode, Json<TableStats>), ApiError> {
    debug!(
        database = %database,
        table = %request.name,
        capacity = request.capacity,
        "Creating table"
    );

    let stats = state.cache_service.create_table(
        &database,
        &request.name,
        request.capacity,
        request.policy,
    )?;

    Ok((StatusCode::CREATED, Json(stats)))
}

/// GET /v1/databases/{database}/tables/{table}
pub async fn get_table(
    State(state): State<AppState>,
    Path((database, table)): Path<(String, String)>,
) -> Result<Json<TableStats>, ApiError> {
    debug!(database = %database, table = %table, "Getting table stats");

    let stats = state.cache_service.table_stats(&database, &table)?;

    Ok(Json(stats))
}
