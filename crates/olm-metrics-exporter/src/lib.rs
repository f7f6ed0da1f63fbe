//! OLM metrics exporter library entry.
//!
//! Wires the metrics registry, the per-kind collectors, a listing source, the
//! polling driver, and the scrape endpoint. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collect;
pub mod config;
pub mod driver;
pub mod obs;
pub mod ops;
pub mod router;
pub mod source;
