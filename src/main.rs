//! votebox server entry point.
//!
//! Starts the Axum HTTP server after the vote store is reachable and
//! its schema exists.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use votebox::api;
use votebox::app_state::AppState;
use votebox::config::VoteboxConfig;
use votebox::persistence::VoteStore;
use votebox::service::VoteService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = VoteboxConfig::from_env()?;
    tracing::info!(mode = %config.deployment_mode, addr = %config.listen_addr, "starting votebox");

    // Connect with bounded retry; a failure here aborts startup — the
    // service never serves traffic without a working store.
    let store = Arc::new(VoteStore::connect(&config).await?);
    store.ensure_schema().await?;

    // Build service layer
    let vote_service = Arc::new(VoteService::new(Arc::clone(&store)));

    // Build application state
    let app_state = AppState {
        vote_service,
        deployment_mode: config.deployment_mode,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
    }
}
