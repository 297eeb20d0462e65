use crate::app_state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Handler for the `/metrics` endpoint.
///
/// Writes the full registry snapshot in Prometheus text format for scraping.
/// No filtering or paging is applied.
pub async fn metrics_handler(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    // ---

    let mut body = Vec::new();
    app_state
        .transport()
        .serve_snapshot(&mut body)
        .map_err(|err| {
            tracing::error!("Failed to serve metrics snapshot: {err:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
