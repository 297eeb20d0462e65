use super::RequestLabels;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Histogram name every backend records request latency under.
pub const REQUEST_DURATION_METRIC: &str = "http_client_request_duration_seconds";

/// Bucket boundaries (seconds) shared by all histogram backends.
pub const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Abstraction over a concurrent metrics registry (histograms keyed by label set).
pub trait MetricsRegistry: Send + Sync + 'static {
    // ---
    /// Record one request duration into the histogram identified by `labels`,
    /// creating that histogram on first use.
    fn observe_request(&self, labels: &RequestLabels<'_>, elapsed: Duration);

    /// Serialize the whole registry in Prometheus text format into `sink`.
    fn write_text(&self, sink: &mut dyn Write) -> Result<()>;
}

/// Type alias for any backend that implements MetricsRegistry.
pub type MetricsPtr = Arc<dyn MetricsRegistry>;
