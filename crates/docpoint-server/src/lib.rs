//! HTTP API for PDF data point extraction.
//!
//! Routes:
//! - `GET /health`
//! - `POST /extract` (pattern matching over bare field names)
//! - `POST /extract-datapoints` (proximity matching over described fields)

pub mod error;
pub mod routes;
pub mod state;

use axum::{Router, extract::DefaultBodyLimit};
use docpoint_core::DocpointConfig;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::extract::router())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &DocpointConfig) -> std::io::Result<()> {
    let state = AppState::from_config(config);
    let app = app(state, config.server.max_body_bytes);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("docpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
