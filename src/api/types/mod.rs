//! Request and response types for the cache API

pub mod cache;
pub mod error;
pub mod json;

pub use cache::{
    CreateDatabaseRequest, CreateTableRequest, DatabaseResponse, DatabasesResponse,
    InsertRowRequest, InsertRowResponse, QueryRequest, QueryResponse, TablesResponse,
};
pub use error::{ApiError, ApiErrorResponse};
pub use json::{Json, Query};
