//! Axum router wiring.
//!
//! Two routes behind one uniform timing layer; `/metrics` is measured the
//! same as application traffic.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::greet))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::timing::track_latency,
        ))
        .with_state(state)
}
