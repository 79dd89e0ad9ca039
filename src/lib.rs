//! Centroid cache
//!
//! A semantic result cache: answers are stored under the embedding of their
//! text and looked up by approximate similarity through a layered centroid
//! index, so that near-duplicate queries skip a full external search.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::Registry;
use infrastructure::embedding::EmbeddingProviderFactory;
use infrastructure::services::CacheService;
use tracing::info;

/// Wire the registry, embedding provider and cache service from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    config.cache.validate()?;
    let provider = EmbeddingProviderFactory::create(&config.embedding)?;
    let registry = Arc::new(Registry::new());

    let mut service = CacheService::new(registry, provider).with_config(config.cache.clone());
    if let Some(model) = &config.embedding.model {
        service = service.with_embedding_model(model.clone());
    }

    info!(
        provider = ?config.embedding.provider,
        model = %service.embedding_model(),
        threshold = service.config().similarity_threshold,
        policy = %service.config().assignment_policy,
        "Cache service initialized"
    );

    Ok(AppState::new(service))
}
