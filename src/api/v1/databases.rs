//! Database endpoint handlers

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateDatabaseRequest, DatabaseResponse, DatabasesResponse, Json};

/// GET /v1/databases
pub async fn list_databases(
    State(state): State<AppState>,
) -> Result<Json<DatabasesResponse>, ApiError> {
    debug!("Listing databases");

    let databases = state.cache_service.list_databases()?;

    Ok(Json(DatabasesResponse { databases }))
}

/// POST /v1/databases
pub async fn create_database(
    State(state): State<AppState>,
    Json(request): Json<CreateDatabaseRequest>,
) -> Result<(StatusCode, Json<DatabaseResponse>), ApiError> {
    debug!(database = %request.name, "Creating database");

    state.cache_service.create_database(&request.name)?;

    Ok((
        StatusCode::CREATED,
        Json(DatabaseResponse { name: request.name }),
    ))
}
