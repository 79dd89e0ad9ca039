//! Layered centroid index
//!
//! A table owns a fixed number of layers. Each layer keeps its entries and
//! the running mean of their vectors. Queries pick the layer whose centroid
//! is closest to the query, then scan only that layer.

mod config;
mod entry;
mod layer;
mod outcome;
mod policy;
mod similarity;
mod table;

pub use config::{is_valid_threshold, CacheConfig};
pub use entry::{CachedValue, Entry, RowId};
pub use layer::Layer;
pub use outcome::{CacheHit, InsertReceipt, QueryOutcome};
pub use policy::AssignmentPolicy;
pub use similarity::{cosine_similarity, is_finite_vector, NORM_EPSILON};
pub use table::{Table, TableStats};
