//! metricdesk server
//!
//! - Catalog: path given as first argument (must exist), else `metricdesk.yaml`
//! - No argument and no `metricdesk.yaml` => built-in catalog on the default listen address
//! - Read-only JSON: /v1/metrics, /v1/metrics/:id, /v1/metrics/:id/dependencies

use tracing_subscriber::{fmt, EnvFilter};

use metricdesk_core::error::{MetricDeskError, Result};
use metricdesk_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let explicit = std::env::args().nth(1);
    let cfg = config::resolve(explicit.as_deref(), config::DEFAULT_CONFIG_PATH)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "metricdesk-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MetricDeskError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MetricDeskError::Internal(format!("server failed: {e}")))
}
