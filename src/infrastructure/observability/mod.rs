//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use config::MetricsConfig;
pub use metrics::{
    create_metrics_router, init_metrics, record_cache_insert, record_cache_query,
    record_embedding_request, record_http_request, PrometheusMetrics,
};
