//! Periodic CPU/memory sampling into the gauges.
//!
//! Two independent interval tasks, registered once at startup. A probe
//! failure ends that task only: its gauge goes stale while the HTTP side
//! keeps serving. Between ticks the gauges hold the last sample taken.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use hostpulse_core::sys::{cpu, mem::MemoryProbe};

use crate::obs::metrics::AppMetrics;

pub struct Sampler {
    handles: Vec<JoinHandle<()>>,
}

impl Sampler {
    /// Spawn the CPU and memory sampling tasks on the current runtime.
    ///
    /// The first sample lands immediately, then one per interval.
    pub fn start(metrics: Arc<AppMetrics>, interval: Duration) -> Self {
        let cpu_task = tokio::spawn(sample_cpu(Arc::clone(&metrics), interval));
        let mem_task = tokio::spawn(sample_memory(metrics, interval));
        Self {
            handles: vec![cpu_task, mem_task],
        }
    }

    /// Abort both tasks. The binary never calls this; tests do.
    pub fn stop(&mut self) {
        for h in self.handles.drain(..) {
            h.abort();
        }
    }
}

async fn sample_cpu(metrics: Arc<AppMetrics>, interval: Duration) {
    let mut tick = tokio::time::interval(interval);
    loop {
        tick.tick().await;
        match cpu::read_core_times() {
            Ok(cores) => metrics.cpu_usage.set(cpu::usage_percent(&cores)),
            Err(e) => {
                tracing::error!(error = %e, "cpu sampling failed, gauge goes stale");
                return;
            }
        }
    }
}

async fn sample_memory(metrics: Arc<AppMetrics>, interval: Duration) {
    let mut probe = MemoryProbe::new();
    let mut tick = tokio::time::interval(interval);
    loop {
        tick.tick().await;
        match probe.read_bytes() {
            Ok(bytes) => metrics.memory_bytes.set(bytes as i64),
            Err(e) => {
                tracing::error!(error = %e, "memory sampling failed, gauge goes stale");
                return;
            }
        }
    }
}
