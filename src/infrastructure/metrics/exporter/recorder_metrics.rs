use crate::domain::{
    MetricsRegistry, RequestLabels, LATENCY_BUCKETS, REQUEST_DURATION_METRIC,
};
use anyhow::{Context, Result};
use metrics::{Key, Label, Level, Metadata, Recorder, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use std::io::Write;
use std::time::Duration;

/// Registry backed by a `metrics-exporter-prometheus` recorder.
///
/// The recorder is built but never installed globally; histograms are
/// registered on it directly, so each instance keeps its own storage.
pub struct RecorderMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl RecorderMetrics {
    /// Build a local recorder with explicit histogram buckets.
    pub fn new() -> Result<Self> {
        // ---
        tracing::info!("Creating exporter-backed metrics");

        let recorder = PrometheusBuilder::new()
            .set_buckets(LATENCY_BUCKETS)
            .context("Invalid histogram buckets")?
            .build_recorder();
        recorder.describe_histogram(
            REQUEST_DURATION_METRIC.into(),
            Some(Unit::Seconds),
            "Duration of outbound HTTP requests in seconds.".into(),
        );
        let handle = recorder.handle();

        Ok(RecorderMetrics { recorder, handle })
    }

    /// Handle for rendering outside of [`MetricsRegistry::write_text`].
    pub fn handle(&self) -> &PrometheusHandle {
        &self.handle
    }
}

impl MetricsRegistry for RecorderMetrics {
    fn observe_request(&self, labels: &RequestLabels<'_>, elapsed: Duration) {
        // ---
        tracing::debug!(?labels, ?elapsed, "Recording request duration");

        let key = Key::from_parts(
            REQUEST_DURATION_METRIC,
            RequestLabels::NAMES
                .iter()
                .zip(labels.values())
                .map(|(name, value)| Label::new(*name, value.to_string()))
                .collect::<Vec<_>>(),
        );
        let metadata = Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

        self.recorder
            .register_histogram(&key, &metadata)
            .record(elapsed.as_secs_f64());
    }

    fn write_text(&self, sink: &mut dyn Write) -> Result<()> {
        // ---
        sink.write_all(self.handle.render().as_bytes())
            .context("Failed to write rendered metrics")
    }
}
