//! Name-keyed databases of tables, shared across request handlers

mod database;
mod registry;

pub use database::{Database, SharedTable};
pub use registry::Registry;

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use crate::domain::DomainError;

pub(crate) fn read_lock<'a, T>(
    lock: &'a std::sync::RwLock<T>,
) -> Result<RwLockReadGuard<'a, T>, DomainError> {
    lock.read()
        .map_err(|e| DomainError::internal(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_lock<'a, T>(
    lock: &'a std::sync::RwLock<T>,
) -> Result<RwLockWriteGuard<'a, T>, DomainError> {
    lock.write()
        .map_err(|e| DomainError::internal(format!("Failed to acquire write lock: {}", e)))
}

fn validate_name(kind: &str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(format!("{} name cannot be empty", kind)));
    }

    Ok(())
}
