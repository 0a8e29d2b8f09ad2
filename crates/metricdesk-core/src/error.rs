//! Shared error type across metricdesk crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Unknown metric identifier.
    NotFound,
    /// Registry data breaks an invariant.
    InvalidRegistry,
    /// Malformed catalog input.
    BadRequest,
    /// Unsupported catalog schema version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::InvalidRegistry => "INVALID_REGISTRY",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricDeskError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum MetricDeskError {
    #[error("metric not found: {0}")]
    NotFound(String),
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported catalog version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricDeskError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricDeskError::NotFound(_) => ClientCode::NotFound,
            MetricDeskError::InvalidRegistry(_) => ClientCode::InvalidRegistry,
            MetricDeskError::BadRequest(_) => ClientCode::BadRequest,
            MetricDeskError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MetricDeskError::Internal(_) => ClientCode::Internal,
        }
    }
}
