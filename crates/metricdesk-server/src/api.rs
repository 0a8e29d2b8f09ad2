//! Read-only JSON endpoints over the metric registry.
//!
//! - `GET /v1/metrics`                   : all descriptors, declaration order
//! - `GET /v1/metrics/:id`               : one descriptor
//! - `GET /v1/metrics/:id/dependencies`  : resolved `dependsOn`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use metricdesk_core::error::{ClientCode, MetricDeskError};
use metricdesk_core::MetricDescriptor;

use crate::app_state::AppState;

/// HTTP-facing wrapper around the shared error type.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub MetricDeskError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::InvalidRegistry | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.0.client_code().as_str(),
                "message": self.0.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct MetricList {
    pub metrics: Vec<MetricDescriptor>,
}

pub async fn list_metrics(State(state): State<AppState>) -> Json<MetricList> {
    let registry = state.registry();
    Json(MetricList {
        metrics: registry.list_metrics().to_vec(),
    })
}

pub async fn get_metric(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MetricDescriptor>, ApiError> {
    let registry = state.registry();
    let metric = registry.get_metric(&id).inspect_err(|_| {
        tracing::warn!(metric = %id, "unknown metric requested");
    })?;
    Ok(Json(metric.clone()))
}

pub async fn get_dependencies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MetricList>, ApiError> {
    let registry = state.registry();
    let deps = registry.dependencies_of(&id).inspect_err(|e| {
        tracing::warn!(metric = %id, error = %e, "dependency lookup failed");
    })?;
    Ok(Json(MetricList {
        metrics: deps.into_iter().cloned().collect(),
    }))
}
