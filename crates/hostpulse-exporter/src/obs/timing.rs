//! Request latency middleware.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Record exactly one histogram observation per completed response.
///
/// The stopwatch stops once the handler has produced its response, so a
/// `/metrics` scrape only ever reports requests completed before it. A
/// connection dropped before the response is produced records nothing.
pub async fn track_latency(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let res = next.run(req).await;
    state
        .metrics()
        .response_time
        .observe(start.elapsed().as_secs_f64());
    res
}
