//! gedparity-api
//!
//! HTTP front end over the parity core and converter bridge:
//! - `GET /healthz`: liveness
//! - `POST /v1/canonicalize`: canonical text + digest for a document
//! - `POST /v1/compare`: parity verdict and structural diff
//! - `GET /export/gwb2ged?input_dir=`: canonical GEDCOM export via the
//!   legacy converter
//!
//! Converter failures are status-coded (503 unconfigured, 502 failed run);
//! a "documents differ" verdict is a 200 response, never an error.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(routes::health::healthz))
        .route("/v1/canonicalize", post(routes::canonicalize::canonicalize))
        .route("/v1/compare", post(routes::compare::compare))
        .route("/export/gwb2ged", get(routes::export::gwb2ged))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// Bind and serve until ctrl-c / SIGTERM.
pub async fn serve(config: config::ApiConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_env());

    tracing::info!(
        addr = %config.bind_addr,
        converter = state.converter.is_some(),
        "starting gedparity-api"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
