use crate::domain::{MetricsRegistry, RequestLabels};
use std::io::Write;
use std::time::Duration;

/// No-op metrics implementation.
#[derive(Default)]
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl MetricsRegistry for NoopMetrics {
    // ---
    fn observe_request(&self, _: &RequestLabels<'_>, _: Duration) {}
    fn write_text(&self, _: &mut dyn Write) -> anyhow::Result<()> {
        Ok(())
    }
}
