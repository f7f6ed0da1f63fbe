//! Listing backends usable by the exporter binary.

pub mod snapshot;

pub use snapshot::{ClusterSnapshot, SnapshotLister};
