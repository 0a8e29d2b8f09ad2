//! Top-level facade crate for metricdesk.
//!
//! Re-exports the registry core and the server library so users can depend on a single crate.

pub mod core {
    pub use metricdesk_core::*;
}

pub mod server {
    pub use metricdesk_server::*;
}
