mod recorder_metrics;

pub use recorder_metrics::RecorderMetrics;
use std::sync::Arc;

/// Creates a metrics implementation backed by `metrics-exporter-prometheus`.
///
/// The recorder is local to the returned instance; nothing is installed as
/// the process-wide `metrics` recorder.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing exporter-backed metrics");
    Ok(Arc::new(RecorderMetrics::new()?))
}
