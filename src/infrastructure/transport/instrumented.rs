//! Latency instrumentation for outbound HTTP requests.
//!
//! [`InstrumentedTransport`] wraps any [`HttpTransport`] and, for every call
//! that completes with a response, records the elapsed time into a shared
//! [`MetricsRegistry`](crate::domain::MetricsRegistry) histogram labeled by
//! status, method, route and service name.
//!
//! The wrapper is observational only:
//! - requests are forwarded untouched and responses returned untouched
//! - transport errors are returned as-is and never recorded
//! - nothing is retried or short-circuited

use crate::domain::{
    status_label, HttpTransport, MetricsPtr, RequestLabels, RouteLabeler, RouteRule,
    DEFAULT_SERVICE_NAME,
};
use crate::infrastructure::metrics::create_prom_metrics;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, Request, Response};
use std::io::Write;
use std::time::{Duration, Instant};

/// An [`HttpTransport`] that records request latency for its inner transport.
///
/// Holds no per-request state; share it across tasks with an `Arc`.
pub struct InstrumentedTransport<T = Client> {
    inner: T,
    registry: MetricsPtr,
    service_name: String,
    normalize_status: bool,
    labeler: RouteLabeler,
}

impl InstrumentedTransport {
    /// Start configuring a transport. Every setting is optional.
    pub fn builder() -> TransportBuilder {
        TransportBuilder::new()
    }
}

impl<T: HttpTransport> InstrumentedTransport<T> {
    // ---

    /// Serialize the whole registry in Prometheus text format.
    ///
    /// Encoding failures are logged; whatever was written is returned.
    pub fn export(&self) -> Vec<u8> {
        // ---
        let mut buf = Vec::new();
        if let Err(err) = self.registry.write_text(&mut buf) {
            tracing::error!("Failed to export metrics: {err:#}");
        }
        buf
    }

    /// Write the same snapshot as [`export`](Self::export) straight into `sink`.
    ///
    /// # Errors
    /// Returns an error if encoding fails or `sink` rejects the write.
    pub fn serve_snapshot<W: Write>(&self, mut sink: W) -> Result<()> {
        // ---
        self.registry.write_text(&mut sink)
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn registry(&self) -> &MetricsPtr {
        &self.registry
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn normalizes_status(&self) -> bool {
        self.normalize_status
    }

    pub fn labeler(&self) -> &RouteLabeler {
        &self.labeler
    }

    fn record(&self, method: &Method, response: &Response, elapsed: Duration) {
        // ---
        let status = status_label(response.status(), self.normalize_status);

        // The final URL, after any redirects the inner transport followed.
        let url = self.labeler.label(response.url().as_str());

        let labels = RequestLabels {
            status: &status,
            method: method.as_str(),
            url,
            module_name: &self.service_name,
        };
        self.registry.observe_request(&labels, elapsed);
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for InstrumentedTransport<T> {
    type Error = T::Error;

    async fn perform(&self, request: Request) -> Result<Response, Self::Error> {
        // ---
        let start = Instant::now();
        let method = request.method().clone();

        let response = self.inner.perform(request).await?;

        self.record(&method, &response, start.elapsed());
        Ok(response)
    }
}

/// Configuration for an [`InstrumentedTransport`].
///
/// Unset fields fall back to explicit defaults at build time:
/// a fresh Prometheus registry, the `client-metrics` service name,
/// `reqwest::Client::new()`, no status normalization, and no route rules.
#[derive(Default)]
pub struct TransportBuilder {
    registry: Option<MetricsPtr>,
    service_name: Option<String>,
    normalize_status: bool,
    route_rules: Vec<RouteRule>,
}

impl TransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record into a shared registry instead of a private one.
    pub fn registry(mut self, registry: MetricsPtr) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Value of the `module_name` label. Empty names are treated as unset.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.service_name = (!name.is_empty()).then_some(name);
        self
    }

    /// Collapse status codes to their class (`404` -> `4XX`).
    pub fn normalize_status(mut self, normalize: bool) -> Self {
        self.normalize_status = normalize;
        self
    }

    /// Append one rule; rules are evaluated in the order they are added.
    pub fn route_rule(mut self, rule: RouteRule) -> Self {
        self.route_rules.push(rule);
        self
    }

    /// Compile and append a `pattern -> label` rule.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn route(self, pattern: &str, label: impl Into<String>) -> Result<Self> {
        Ok(self.route_rule(RouteRule::new(pattern, label)?))
    }

    /// Append several rules, preserving their order.
    pub fn route_rules(mut self, rules: impl IntoIterator<Item = RouteRule>) -> Self {
        self.route_rules.extend(rules);
        self
    }

    /// Build on top of a default `reqwest::Client`.
    pub fn build(self) -> Result<InstrumentedTransport> {
        self.build_with(Client::new())
    }

    /// Build on top of `inner`.
    ///
    /// # Errors
    /// Returns an error only if the default registry cannot be created.
    pub fn build_with<T: HttpTransport>(self, inner: T) -> Result<InstrumentedTransport<T>> {
        // ---
        let registry = match self.registry {
            Some(registry) => registry,
            None => create_prom_metrics()?,
        };
        let service_name = self
            .service_name
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        tracing::info!(
            service_name = %service_name,
            normalize_status = self.normalize_status,
            route_rules = self.route_rules.len(),
            "Creating instrumented transport"
        );

        Ok(InstrumentedTransport {
            inner,
            registry,
            service_name,
            normalize_status: self.normalize_status,
            labeler: RouteLabeler::new(self.route_rules),
        })
    }
}
