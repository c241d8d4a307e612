//! hostpulse core: shared error surface and OS counter probes.
//!
//! This crate defines the error type and the raw CPU/memory probes whose
//! readings the exporter publishes. It intentionally carries no HTTP or
//! async-runtime dependencies so the probes and their math stay exercisable
//! from plain tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HostPulseError`/`Result` so the
//! exporter process does not crash on a missing or malformed counter source.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod sys;

/// Shared result type.
pub use error::{HostPulseError, Result};
