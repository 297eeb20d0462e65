// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

use handlers::{health_check, metrics_handler, root_handler};

// Public exports (visible outside this module)
pub mod domain;
pub mod probe;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

pub use config::*;

// Publicly expose the infrastructure types and creation functions
pub use infrastructure::{
    create_exporter_metrics, // ---
    create_metrics,
    create_noop_metrics,
    create_prom_metrics,
    create_prom_metrics_with_registry,
    InstrumentedTransport,
    MetricsBackend,
    TransportBuilder,
};

/// Build the instrumented transport described by `config`.
///
/// # Errors
/// Returns an error if the configured metrics backend cannot be created.
pub fn create_transport(config: &InstrumentationConfig) -> Result<InstrumentedTransport> {
    // ---
    let registry = create_metrics(config.backend)?;

    InstrumentedTransport::builder()
        .registry(registry)
        .service_name(config.service_name.clone())
        .normalize_status(config.normalize_status)
        .route_rules(config.route_rules.iter().cloned())
        .build()
}

/// Build the HTTP router that exposes `transport`'s registry for scraping.
pub fn create_router(transport: Arc<InstrumentedTransport>) -> Router {
    // ---
    let app_state = AppState::new(transport);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state)
}
