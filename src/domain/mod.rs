mod labels;
mod metrics;
mod route;
mod transport;

// Publicly expose the Metrics abstraction
pub use self::metrics::{MetricsPtr, MetricsRegistry, LATENCY_BUCKETS, REQUEST_DURATION_METRIC};

// Label derivation shared by every registry backend
pub use labels::{status_label, RequestLabels, DEFAULT_SERVICE_NAME};
pub use route::{RouteLabeler, RouteRule};

// Publicly expose the transport seam
pub use transport::HttpTransport;
