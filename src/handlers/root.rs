use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"HTTP client metrics 👋
Version: {version}

Available endpoints:
  - GET    /metrics - Outbound request latency in Prometheus text format
  - GET    /health  - Liveness check

Latency is recorded per (status, method, url, module_name) for every
outbound request that completes through the instrumented transport.
"#
    )
}
