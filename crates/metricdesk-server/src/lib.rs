//! metricdesk server library entry.
//!
//! Loads the catalog config, builds the metric registry once, and exposes it
//! read-only over HTTP for the dashboard. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
