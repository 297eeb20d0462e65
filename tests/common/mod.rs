// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use http_client_metrics::domain::HttpTransport;
use http_client_metrics::InstrumentedTransport;
use reqwest::{Client, Method, Request, Response, Url};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

/// Name of the histogram every backend records into.
pub const HISTOGRAM: &str = "http_client_request_duration_seconds";

// ============================================================================
// Upstream server
// ============================================================================

async fn get_user(Path(id): Path<u64>) -> impl IntoResponse {
    // ---
    sleep(Duration::from_millis(10)).await;
    format!("user {id}")
}

async fn get_order(Path(id): Path<u64>) -> impl IntoResponse {
    format!("order {id}")
}

async fn with_status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

/// A throwaway upstream the instrumented client talks to.
pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // --

        // Enable debug logging only when requested
        if std::env::var("TEST_DEBUG").is_ok() {
            tracing_subscriber::fmt::try_init().ok();
        }

        let app = Router::new()
            .route("/users/{id}", get(get_user))
            .route("/orders/{id}", get(get_order))
            .route("/status/{code}", get(with_status))
            .route("/redirect", get(|| async { Redirect::temporary("/users/7") }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// Sends `method path` through `transport`.
    pub async fn send(
        &self,
        transport: &InstrumentedTransport,
        method: Method,
        path: &str,
    ) -> Result<Response, reqwest::Error> {
        // ---
        let request = Request::new(method, Url::parse(&self.url(path)).unwrap());
        transport.perform(request).await
    }
}

/// A URL nothing listens on.
pub async fn closed_port_url() -> String {
    // ---
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/users/1")
}

// ============================================================================
// Exposition helpers
// ============================================================================

pub fn render(transport: &InstrumentedTransport) -> String {
    String::from_utf8(transport.export()).expect("metrics should be UTF-8")
}

/// Value of the `<HISTOGRAM>_<suffix>` sample whose labels contain every
/// `name="value"` pair in `labels`, regardless of label order.
pub fn sample(body: &str, suffix: &str, labels: &[(&str, &str)]) -> Option<f64> {
    // ---
    let prefix = format!("{HISTOGRAM}_{suffix}{{");
    body.lines()
        .filter(|line| line.starts_with(&prefix))
        .find(|line| {
            labels
                .iter()
                .all(|(name, value)| line.contains(&format!(r#"{name}="{value}""#)))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

/// Number of distinct label sets with at least one observation.
pub fn histogram_count(body: &str) -> usize {
    // ---
    let prefix = format!("{HISTOGRAM}_count{{");
    body.lines().filter(|line| line.starts_with(&prefix)).count()
}
