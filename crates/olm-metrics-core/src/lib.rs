//! OLM metrics core: resource kinds, the listing contract, and the shared
//! error surface.
//!
//! This crate defines what a collector consumes (a [`ResourceLister`]) and how
//! failures are reported. It carries no runtime, HTTP, or metrics-storage
//! dependencies so listing backends can be implemented against it alone.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths must surface as `MetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod resource;

/// Shared result type.
pub use error::{ErrorKind, MetricsError, Result};
pub use resource::{ListParams, ObjectRef, ResourceKind, ResourceList, ResourceLister};
