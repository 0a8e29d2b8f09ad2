use std::net::SocketAddr;

use metricdesk_core::error::{MetricDeskError, Result};
use metricdesk_core::{MetricDescriptor, MetricRegistry};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    /// None => built-in catalog.
    #[serde(default)]
    pub metrics: Option<Vec<MetricDescriptor>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: None,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricDeskError::UnsupportedVersion);
        }

        self.server.validate()?;

        if let Some(metrics) = &self.metrics {
            MetricRegistry::validate(metrics)?;
        }
        Ok(())
    }

    /// `"file"` when the config lists its own metrics, else `"builtin"`.
    pub fn registry_source(&self) -> &'static str {
        if self.metrics.is_some() {
            "file"
        } else {
            "builtin"
        }
    }

    /// Registry from the file's metrics, or the built-in catalog.
    pub fn build_registry(&self) -> Result<MetricRegistry> {
        match &self.metrics {
            Some(metrics) => MetricRegistry::new(metrics.clone()),
            None => MetricRegistry::builtin(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            MetricDeskError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8090".into()
}
