//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;

const MAX_PATH_LABEL_LEN: usize = 80;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Install the global Prometheus recorder
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("centroid_cache_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path_label(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record the outcome of a cache lookup
pub fn record_cache_query(hit: bool, similarity: Option<f32>) {
    let outcome = if hit { "hit" } else { "miss" };

    counter!("cache_queries_total", "outcome" => outcome).increment(1);

    if let Some(similarity) = similarity {
        histogram!("cache_query_similarity").record(similarity as f64);
    }
}

pub fn record_cache_insert() {
    counter!("cache_inserts_total").increment(1);
}

/// Record one call to the embedding provider
pub fn record_embedding_request(provider: &str, success: bool, duration: Duration) {
    let labels = [
        ("provider", provider.to_string()),
        ("status", if success { "success" } else { "error" }.to_string()),
    ];

    counter!("embedding_requests_total", &labels).increment(1);
    histogram!("embedding_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Label value for a route template, capped in length
fn path_label(path: &str) -> String {
    path.chars().take(MAX_PATH_LABEL_LEN).collect()
}
