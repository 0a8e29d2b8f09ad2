//! Catalog config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use metricdesk_core::error::{MetricDeskError, Result};

pub use schema::{CatalogConfig, ServerSection};

/// Config path used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "metricdesk.yaml";

/// Select the startup config.
///
/// An explicit path must load. Without one, `default_path` is loaded when it
/// exists, otherwise the built-in catalog is served with default settings.
pub fn resolve(explicit: Option<&str>, default_path: &str) -> Result<CatalogConfig> {
    if let Some(path) = explicit {
        return load_from_file(path);
    }
    if Path::new(default_path).exists() {
        return load_from_file(default_path);
    }
    tracing::info!(path = %default_path, "no config file, serving built-in catalog");
    Ok(CatalogConfig::default())
}

pub fn load_from_file(path: &str) -> Result<CatalogConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricDeskError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CatalogConfig> {
    let cfg: CatalogConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricDeskError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
