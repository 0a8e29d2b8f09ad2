//! Shared application state for the metricdesk server.
//!
//! The registry is built and validated once at startup, then shared
//! read-only by every handler.

use std::sync::Arc;

use metricdesk_core::error::Result;
use metricdesk_core::MetricRegistry;

use crate::config::CatalogConfig;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<MetricRegistry>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &CatalogConfig) -> Result<Self> {
        let registry = cfg.build_registry()?;
        tracing::info!(
            metrics = registry.len(),
            source = cfg.registry_source(),
            "metric registry loaded"
        );
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn registry(&self) -> Arc<MetricRegistry> {
        Arc::clone(&self.registry)
    }
}
