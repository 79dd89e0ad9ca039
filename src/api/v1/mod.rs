//! JSON API for databases, tables, rows and queries

pub mod databases;
pub mod rows;
pub mod tables;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/databases",
            get(databases::list_databases).post(databases::create_database),
        )
        .route(
            "/databases/{database}/tables",
            get(tables::list_tables).post(tables::create_table),
        )
        .route(
            "/databases/{database}/tables/{table}",
            get(tables::get_table),
        )
        .route(
            "/databases/{database}/tables/{table}/rows",
            post(rows::insert_row),
        )
        .route(
            "/databases/{database}/tables/{table}/query",
            post(rows::query_table),
        )
}
