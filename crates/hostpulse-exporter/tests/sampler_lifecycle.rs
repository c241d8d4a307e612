#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use hostpulse_exporter::{obs::metrics::AppMetrics, sampler::Sampler};

#[tokio::test]
async fn ticks_populate_gauges() {
    let metrics = Arc::new(AppMetrics::new().expect("registry"));
    let mut sampler = Sampler::start(Arc::clone(&metrics), Duration::from_millis(20));

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(metrics.memory_bytes.get() > 0);
    #[cfg(target_os = "linux")]
    {
        let pct = metrics.cpu_usage.get();
        assert!((0.0..=100.0).contains(&pct));
    }

    sampler.stop();
}

#[tokio::test]
async fn stop_freezes_gauges() {
    let metrics = Arc::new(AppMetrics::new().expect("registry"));
    let mut sampler = Sampler::start(Arc::clone(&metrics), Duration::from_millis(10));

    tokio::time::sleep(Duration::from_millis(80)).await;
    sampler.stop();
    // let the aborts land before reading
    tokio::time::sleep(Duration::from_millis(30)).await;

    let mem_before = metrics.memory_bytes.get();
    let cpu_before = metrics.cpu_usage.get();
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(metrics.memory_bytes.get(), mem_before);
    assert_eq!(metrics.cpu_usage.get(), cpu_before);
}
