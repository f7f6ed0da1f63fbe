//! Top-level facade crate for olm-metrics.
//!
//! Re-exports the core contract and the exporter library so users can depend on a single crate.

pub mod core {
    pub use olm_metrics_core::*;
}

pub mod exporter {
    pub use olm_metrics_exporter::*;
}
