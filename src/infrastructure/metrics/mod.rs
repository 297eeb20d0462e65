pub mod exporter;
pub mod noop;
pub mod prometheus;

use crate::domain::MetricsPtr;
use anyhow::{bail, Result};
use std::str::FromStr;

// Re-export the factory functions for easy access
pub use self::exporter::create as create_exporter_metrics;
pub use self::noop::create as create_noop_metrics;
pub use self::prometheus::create as create_prom_metrics;
pub use self::prometheus::create_with_registry as create_prom_metrics_with_registry;

/// Which registry implementation backs the instrumented transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsBackend {
    /// `prometheus` crate registry (default).
    #[default]
    Prom,
    /// `metrics-exporter-prometheus` recorder.
    Exporter,
    /// Discard everything.
    Noop,
}

impl FromStr for MetricsBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        // ---
        match s.trim().to_ascii_lowercase().as_str() {
            "prom" | "prometheus" => Ok(Self::Prom),
            "exporter" => Ok(Self::Exporter),
            "noop" => Ok(Self::Noop),
            other => bail!("Unknown metrics backend: {other}"),
        }
    }
}

/// Creates a fresh registry for `backend`.
pub fn create_metrics(backend: MetricsBackend) -> Result<MetricsPtr> {
    // ---
    match backend {
        MetricsBackend::Prom => create_prom_metrics(),
        MetricsBackend::Exporter => create_exporter_metrics(),
        MetricsBackend::Noop => create_noop_metrics(),
    }
}
