//! metricdesk core: metric descriptors, the immutable registry, and the
//! built-in dashboard catalog.
//!
//! A descriptor maps a metric identifier to the opaque keys and path fragments
//! a data-fetching layer needs (benchmark, current value, history, auxiliary
//! tag mapping). Nothing here computes metric values, and the crate carries no
//! transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. A bad identifier
//! surfaces as `MetricDeskError::NotFound`, a malformed catalog as
//! `MetricDeskError::InvalidRegistry`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod builtin;
pub mod descriptor;
pub mod error;
pub mod registry;

pub use descriptor::{AuxiliaryPaths, MetricDescriptor};
/// Shared result type.
pub use error::{MetricDeskError, Result};
pub use registry::MetricRegistry;
