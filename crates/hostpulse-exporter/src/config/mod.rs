//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use hostpulse_core::error::{HostPulseError, Result};

pub use schema::{ExporterConfig, SamplerSection, ServerSection};

/// Load config from `path`, falling back to defaults when the file is absent.
///
/// The exporter is expected to run with zero configuration; the file only
/// exists to override the listen address or the sampling cadence.
pub fn load_or_default(path: &str) -> Result<ExporterConfig> {
    if !Path::new(path).exists() {
        return Ok(ExporterConfig::default());
    }
    let s = fs::read_to_string(path)
        .map_err(|e| HostPulseError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| HostPulseError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
