//! Semantic cache service
//!
//! Embeds texts through the configured provider and routes them into the
//! layered centroid index of the addressed table.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::embedding::{EmbeddingProvider, EmbeddingRequest};
use crate::domain::index::is_valid_threshold;
use crate::domain::registry::{read_lock, write_lock};
use crate::domain::{
    AssignmentPolicy, CacheConfig, CachedValue, DomainError, InsertReceipt, QueryOutcome,
    Registry, SharedTable, TableStats,
};
use crate::infrastructure::observability::{
    record_cache_insert, record_cache_query, record_embedding_request,
};

/// Cache operations over a shared [`Registry`]
pub struct CacheService {
    registry: Arc<Registry>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    embedding_model: String,
    config: CacheConfig,
}

impl CacheService {
    /// Create a service using the provider's default model and default config
    pub fn new(registry: Arc<Registry>, embedding_provider: Arc<dyn EmbeddingProvider>) -> Self {
        let embedding_model = embedding_provider.default_model().to_string();

        Self {
            registry,
            embedding_provider,
            embedding_model,
            config: CacheConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn embedding_model(&self) -> &str {
        &self.embedding_model
    }

    pub fn create_database(&self, name: &str) -> Result<(), DomainError> {
        self.registry.create_database(name)?;
        info!(database = %name, "Database created");
        Ok(())
    }

    pub fn list_databases(&self) -> Result<Vec<String>, DomainError> {
        self.registry.database_names()
    }

    /// Create a table with `capacity` layers, using the configured policy
    /// unless one is given
    pub fn create_table(
        &self,
        database: &str,
        name: &str,
        capacity: u32,
        policy: Option<AssignmentPolicy>,
    ) -> Result<TableStats, DomainError> {
        let policy = policy.unwrap_or(self.config.assignment_policy);
        let table = self
            .registry
            .database(database)?
            .create_table(name, capacity, policy)?;

        info!(
            database = %database,
            table = %name,
            capacity,
            policy = %policy,
            "Table created"
        );

        let stats = read_lock(&table)?.stats();
        Ok(stats)
    }

    pub fn list_tables(&self, database: &str) -> Result<Vec<String>, DomainError> {
        self.registry.database(database)?.table_names()
    }

    pub fn table_stats(&self, database: &str, table: &str) -> Result<TableStats, DomainError> {
        let table = self.resolve_table(database, table)?;
        let stats = read_lock(&table)?.stats();
        Ok(stats)
    }

    /// Embed `value.text` and store it. Nothing is stored when embedding fails.
    pub async fn insert(
        &self,
        database: &str,
        table: &str,
        value: CachedValue,
    ) -> Result<InsertReceipt, DomainError> {
        let shared = self.resolve_table(database, table)?;
        let vector = self.embed(value.text()).await?;

        let receipt = {
            let mut guard = write_lock(&shared)?;
            guard.insert(value, vector)?
        };

        record_cache_insert();
        debug!(
            database = %database,
            table = %table,
            row_id = %receipt.row_id,
            layer = receipt.layer,
            "Row inserted"
        );

        Ok(receipt)
    }

    /// Look up the closest cached value for `prompt`.
    ///
    /// An empty table is a miss without calling the embedding provider.
    pub async fn query(
        &self,
        database: &str,
        table: &str,
        prompt: &str,
        threshold: Option<f32>,
    ) -> Result<QueryOutcome, DomainError> {
        let threshold = self.resolve_threshold(threshold)?;
        let shared = self.resolve_table(database, table)?;

        let is_empty = read_lock(&shared)?.is_empty();
        if is_empty {
            debug!(database = %database, table = %table, "Query on empty table");
            record_cache_query(false, None);
            return Ok(QueryOutcome::empty_miss());
        }

        let vector = self.embed(prompt).await?;

        let outcome = {
            let guard = read_lock(&shared)?;
            guard.search(&vector, threshold)?
        };

        record_cache_query(outcome.is_hit(), outcome.similarity());

        match &outcome {
            QueryOutcome::Hit(hit) => debug!(
                database = %database,
                table = %table,
                row_id = %hit.row_id,
                layer = hit.layer,
                similarity = hit.similarity,
                "Cache hit"
            ),
            QueryOutcome::Miss { best_similarity } => debug!(
                database = %database,
                table = %table,
                best_similarity = ?best_similarity,
                "Cache miss"
            ),
        }

        Ok(outcome)
    }

    fn resolve_table(&self, database: &str, table: &str) -> Result<SharedTable, DomainError> {
        self.registry.database(database)?.table(table)
    }

    fn resolve_threshold(&self, threshold: Option<f32>) -> Result<f32, DomainError> {
        match threshold {
            None => Ok(self.config.similarity_threshold),
            Some(t) if is_valid_threshold(t) => Ok(t),
            Some(t) => Err(DomainError::validation(format!(
                "Similarity threshold must be within [-1, 1], got {}",
                t
            ))),
        }
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let provider = self.embedding_provider.provider_name();
        let request = EmbeddingRequest::new(&self.embedding_model, text);
        let start = Instant::now();

        let result = self
            .embedding_provider
            .embed(request)
            .await
            .and_then(|response| response.into_first_vector(provider));

        record_embedding_request(provider, result.is_ok(), start.elapsed());

        if let Err(ref e) = result {
            warn!(provider = %provider, error = %e, "Embedding failed");
        }

        result
    }
}
