pub mod metrics;
pub mod transport;

// Re-export the factory functions for easy access
pub use self::metrics::{
    create_exporter_metrics, create_metrics, create_noop_metrics, create_prom_metrics,
    create_prom_metrics_with_registry, MetricsBackend,
};
pub use self::transport::{InstrumentedTransport, TransportBuilder};
