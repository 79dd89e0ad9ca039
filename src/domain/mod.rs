//! Domain layer - the layered centroid index and its collaborators

pub mod embedding;
pub mod error;
pub mod index;
pub mod registry;

pub use error::DomainError;
pub use index::{
    AssignmentPolicy, CacheConfig, CacheHit, CachedValue, InsertReceipt, QueryOutcome, RowId,
    Table, TableStats,
};
pub use registry::{Database, Registry, SharedTable};
