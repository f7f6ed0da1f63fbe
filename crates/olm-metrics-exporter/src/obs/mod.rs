//! In-process metrics (dependency-light).
//!
//! Metric values are stored as atomics and rendered by the `/metrics`
//! handler. The registry is filled once at startup by
//! [`OperatorMetrics::register`] and is read-only afterwards.

pub mod metrics;
pub mod operator;

pub use metrics::{Counter, Gauge, Registry, RegistryState};
pub use operator::OperatorMetrics;
