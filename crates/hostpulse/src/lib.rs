//! Top-level facade crate for hostpulse.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use hostpulse_core::*;
}

pub mod exporter {
    pub use hostpulse_exporter::*;
}
