//! Application state shared by handlers

use std::sync::Arc;

use crate::infrastructure::services::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub cache_service: Arc<CacheService>,
}

impl AppState {
    pub fn new(cache_service: CacheService) -> Self {
        Self {
            cache_service: Arc::new(cache_service),
        }
    }
}
