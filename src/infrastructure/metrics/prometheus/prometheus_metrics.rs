//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `MetricsRegistry`
//! trait on top of the `prometheus` crate. Each instance owns (or is attached
//! to) a `prometheus::Registry` rather than the crate's process-wide default
//! registry, so independent transports never share state by accident.
//!
//! Request latency lives in a single `HistogramVec`; its get-or-create by
//! label values is what gives every distinct label set its own histogram.

use crate::domain::{
    MetricsRegistry, RequestLabels, LATENCY_BUCKETS, REQUEST_DURATION_METRIC,
};
use anyhow::{Context, Result};
use prometheus::{Encoder, HistogramOpts, HistogramVec, Registry, TextEncoder};
use std::io::Write;
use std::time::Duration;

const REQUEST_DURATION_HELP: &str = "Duration of outbound HTTP requests in seconds.";

/// Prometheus-backed registry of outbound request latency histograms.
pub struct PrometheusMetrics {
    /// Registry serialized on export. May also hold metrics owned by others.
    registry: Registry,

    /// Latency histograms keyed by (status, method, url, module_name).
    request_duration: HistogramVec,
}

impl PrometheusMetrics {
    /// Creates the latency histogram family and registers it with `registry`.
    ///
    /// # Errors
    /// Fails if `registry` already holds a metric named
    /// `http_client_request_duration_seconds`.
    pub fn new(registry: Registry) -> Result<Self> {
        // ---
        tracing::info!("Creating Prometheus metrics");

        let opts = HistogramOpts::new(REQUEST_DURATION_METRIC, REQUEST_DURATION_HELP)
            .buckets(LATENCY_BUCKETS.to_vec());
        let request_duration = HistogramVec::new(opts, &RequestLabels::NAMES)
            .context("Failed to create request duration histogram")?;

        registry
            .register(Box::new(request_duration.clone()))
            .context("Failed to register request duration histogram")?;

        Ok(PrometheusMetrics {
            registry,
            request_duration,
        })
    }

    /// The registry this backend serializes.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The latency histogram family, for direct inspection.
    pub fn request_duration(&self) -> &HistogramVec {
        &self.request_duration
    }
}

impl MetricsRegistry for PrometheusMetrics {
    fn observe_request(&self, labels: &RequestLabels<'_>, elapsed: Duration) {
        // ---
        tracing::debug!(?labels, ?elapsed, "Recording request duration");
        self.request_duration
            .with_label_values(&labels.values())
            .observe(elapsed.as_secs_f64());
    }

    fn write_text(&self, mut sink: &mut dyn Write) -> Result<()> {
        // ---
        let families = self.registry.gather();
        TextEncoder::new()
            .encode(&families, &mut sink)
            .context("Failed to encode Prometheus metrics")
    }
}
