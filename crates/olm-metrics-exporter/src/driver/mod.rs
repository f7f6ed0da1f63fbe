//! Driver module exports.
//!
//! The collectors make no scheduling assumptions; this is the fixed-interval
//! driver used by the exporter binary.

pub mod poller;
pub mod shutdown;

pub use poller::{Poller, RoundReport};
pub use shutdown::wait_for_signal;
