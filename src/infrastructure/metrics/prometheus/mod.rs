mod prometheus_metrics;

pub use prometheus_metrics::PrometheusMetrics;
use prometheus::Registry;
use std::sync::Arc;

/// Creates a new Prometheus metrics implementation with its own empty registry.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    create_with_registry(Registry::new())
}

/// Creates a Prometheus metrics implementation attached to an externally
/// owned registry, so its histograms are exported alongside whatever else
/// that registry holds.
pub fn create_with_registry(registry: Registry) -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    Ok(Arc::new(PrometheusMetrics::new(registry)?))
}
