//! Prometheus registry wrapper for the exporter.
//!
//! Four application metrics plus, on Linux, the library's default process
//! collector. Every metric has exactly one writer role: the greeting handler
//! owns the counter, the timing layer owns the histogram, and the sampler
//! owns both gauges. None is ever reset or unregistered.

use prometheus::{Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

use hostpulse_core::error::{HostPulseError, Result};

/// Request latency buckets, in seconds.
const LATENCY_BUCKETS: &[f64] = &[0.1, 0.3, 0.5, 1.0, 2.0, 5.0];

pub struct AppMetrics {
    registry: Registry,
    pub requests_total: IntCounter,
    pub response_time: Histogram,
    pub cpu_usage: Gauge,
    pub memory_bytes: IntGauge,
}

impl AppMetrics {
    /// Build and register the full metric set.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounter::new(
            "app_request_total",
            "Contador total de requisições HTTP recebidas",
        )
        .map_err(metrics_err)?;
        let response_time = Histogram::with_opts(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Tempo de resposta das requisições HTTP em segundos",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
        )
        .map_err(metrics_err)?;
        let cpu_usage = Gauge::new(
            "app_cpu_usage_percent",
            "Uso atual de CPU do sistema em porcentagem",
        )
        .map_err(metrics_err)?;
        let memory_bytes = IntGauge::new(
            "app_memory_usage_bytes",
            "Uso atual de memória em bytes",
        )
        .map_err(metrics_err)?;

        registry
            .register(Box::new(requests_total.clone()))
            .map_err(metrics_err)?;
        registry
            .register(Box::new(response_time.clone()))
            .map_err(metrics_err)?;
        registry
            .register(Box::new(cpu_usage.clone()))
            .map_err(metrics_err)?;
        registry
            .register(Box::new(memory_bytes.clone()))
            .map_err(metrics_err)?;

        // Default process metrics (open fds, rss, cpu seconds, ...).
        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(
                prometheus::process_collector::ProcessCollector::for_self(),
            ))
            .map_err(metrics_err)?;

        Ok(Self {
            registry,
            requests_total,
            response_time,
            cpu_usage,
            memory_bytes,
        })
    }

    /// Render every registered metric in the text exposition format.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .map_err(metrics_err)?;
        String::from_utf8(buf)
            .map_err(|e| HostPulseError::Metrics(format!("non-utf8 exposition: {e}")))
    }
}

fn metrics_err<E: std::fmt::Display>(e: E) -> HostPulseError {
    HostPulseError::Metrics(e.to_string())
}
