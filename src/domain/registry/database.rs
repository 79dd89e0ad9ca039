//! A database: independent tables keyed by name

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{read_lock, validate_name, write_lock};
use crate::domain::index::{AssignmentPolicy, Table};
use crate::domain::DomainError;

/// Table behind its own lock: shared for queries, exclusive for inserts
pub type SharedTable = Arc<RwLock<Table>>;

#[derive(Debug)]
pub struct Database {
    name: String,
    tables: RwLock<HashMap<String, SharedTable>>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a new table with `capacity` empty layers
    pub fn create_table(
        &self,
        name: &str,
        capacity: u32,
        policy: AssignmentPolicy,
    ) -> Result<SharedTable, DomainError> {
        validate_name("Table", name)?;
        let table = Table::new(name, capacity, policy)?;

        let mut tables = write_lock(&self.tables)?;

        if tables.contains_key(name) {
            return Err(DomainError::already_exists(format!(
                "Table '{}' already exists in database '{}'",
                name, self.name
            )));
        }

        let table = Arc::new(RwLock::new(table));
        tables.insert(name.to_string(), Arc::clone(&table));

        Ok(table)
    }

    pub fn table(&self, name: &str) -> Result<SharedTable, DomainError> {
        read_lock(&self.tables)?
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::table_not_found(name))
    }

    /// Table names in sorted order
    pub fn table_names(&self) -> Result<Vec<String>, DomainError> {
        let mut names: Vec<String> = read_lock(&self.tables)?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get_table() {
        let db = Database::new("docs");

        db.create_table("answers", 4, AssignmentPolicy::RoundRobin)
            .unwrap();
        let table = db.table("answers").unwrap();

        let table = table.read().unwrap();
        assert_eq!(table.name(), "answers");
        assert_eq!(table.capacity(), 4);
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let db = Database::new("docs");
        db.create_table("answers", 2, AssignmentPolicy::RoundRobin)
            .unwrap();

        let err = db
            .create_table("answers", 8, AssignmentPolicy::RoundRobin)
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyExists { .. }));
        assert_eq!(db.table("answers").unwrap().read().unwrap().capacity(), 2);
    }

    #[test]
    fn test_missing_table() {
        let db = Database::new("docs");

        assert!(matches!(
            db.table("nope"),
            Err(DomainError::TableNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_tables_rejected() {
        let db = Database::new("docs");

        assert!(db.create_table(" ", 2, AssignmentPolicy::RoundRobin).is_err());
        assert!(db.create_table("t", 0, AssignmentPolicy::RoundRobin).is_err());
        assert!(db.table_names().unwrap().is_empty());
    }

    #[test]
    fn test_table_names_sorted() {
        let db = Database::new("docs");
        for name in ["zeta", "alpha", "mid"] {
            db.create_table(name, 1, AssignmentPolicy::RoundRobin).unwrap();
        }

        assert_eq!(db.table_names().unwrap(), vec!["alpha", "mid", "zeta"]);
    }
}
