//! Shared application state for the exporter.

use std::sync::Arc;

use hostpulse_core::error::Result;

use crate::config::ExporterConfig;
use crate::obs::metrics::AppMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    metrics: Arc<AppMetrics>,
}

impl AppState {
    /// Build application state; the metric set is registered exactly once.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let metrics = Arc::new(AppMetrics::new()?);
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<AppMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
