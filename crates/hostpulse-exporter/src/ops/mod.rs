//! HTTP endpoints.
//!
//! - `/`        : greeting (bumps the request counter)
//! - `/metrics` : Prometheus text format

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

/// Fixed greeting payload served from `/`.
const GREETING: &str = "Prometheus + Grafana + Kubernetes + Rust 💪";

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics().requests_total.inc();
    (StatusCode::OK, GREETING)
}

/// Scrapes are timed like any other request but do not count as app traffic,
/// so repeated scraping leaves `app_request_total` untouched.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics().render() {
        Ok(body) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics unavailable").into_response()
        }
    }
}
