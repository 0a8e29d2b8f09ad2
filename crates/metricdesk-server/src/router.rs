//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/v1/metrics", get(api::list_metrics))
        .route("/v1/metrics/:id", get(api::get_metric))
        .route("/v1/metrics/:id/dependencies", get(api::get_dependencies))
        .with_state(state)
}
