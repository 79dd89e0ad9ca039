//! Process-wide registry of databases

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{read_lock, validate_name, write_lock, Database};
use crate::domain::DomainError;

/// Databases keyed by name.
///
/// Constructed once at startup and handed to whoever needs it; there is no
/// global instance.
#[derive(Debug, Default)]
pub struct Registry {
    databases: RwLock<HashMap<String, Arc<Database>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_database(&self, name: &str) -> Result<Arc<Database>, DomainError> {
        validate_name("Database", name)?;

        let mut databases = write_lock(&self.databases)?;

        if databases.contains_key(name) {
            return Err(DomainError::already_exists(format!(
                "Database '{}' already exists",
                name
            )));
        }

        let database = Arc::new(Database::new(name));
        databases.insert(name.to_string(), Arc::clone(&database));

        Ok(database)
    }

    pub fn database(&self, name: &str) -> Result<Arc<Database>, DomainError> {
        read_lock(&self.databases)?
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::database_not_found(name))
    }

    /// Database names in sorted order
    pub fn database_names(&self) -> Result<Vec<String>, DomainError> {
        let mut names: Vec<String> = read_lock(&self.databases)?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        Ok(read_lock(&self.databases)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}
