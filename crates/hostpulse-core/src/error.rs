//! Shared error type across hostpulse crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostPulseError>;

/// Unified error type used by core and the exporter.
#[derive(Debug, Error)]
pub enum HostPulseError {
    #[error("config: {0}")]
    Config(String),
    #[error("system probe: {0}")]
    Sys(String),
    #[error("metrics: {0}")]
    Metrics(String),
    #[error("internal: {0}")]
    Internal(String),
}
