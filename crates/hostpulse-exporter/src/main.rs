//! hostpulse exporter
//!
//! - `GET /`        : greeting, bumps the request counter
//! - `GET /metrics` : Prometheus text exposition
//! - Background sampler: CPU / memory gauges on a fixed cadence

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use hostpulse_exporter::{app_state, config, router, sampler};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config is optional; defaults serve 0.0.0.0:3123 with a 5s cadence.
    let cfg = config::load_or_default("hostpulse.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");

    // Registered once, never cancelled; held for the life of the process.
    let _sampler = sampler::Sampler::start(state.metrics(), state.cfg().sampler.interval());

    let app = router::build_router(state);

    tracing::info!(%listen, metrics_path = "/metrics", "hostpulse-exporter serving");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
