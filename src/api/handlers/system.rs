//! System endpoints: health check and service metadata.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::{ErrorResponse, VoteboxError};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: &'static str,
    mode: &'static str,
}

/// `GET /health` — Store-connectivity status.
///
/// # Errors
///
/// Returns [`VoteboxError::StorageUnavailable`] when the store does not
/// answer a liveness ping.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns 200 when the backing store answers a liveness \
                   ping, 503 otherwise.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, VoteboxError> {
    if !state.vote_service.is_healthy().await {
        return Err(VoteboxError::StorageUnavailable(
            "health ping failed".to_string(),
        ));
    }
    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            mode: state.deployment_mode.as_str(),
        }),
    ))
}

/// Endpoint listing included in the root response.
#[derive(Debug, Serialize, ToSchema)]
struct EndpointList {
    health: &'static str,
    vote: &'static str,
    results: &'static str,
}

/// Service metadata returned by the root endpoint.
#[derive(Debug, Serialize, ToSchema)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    mode: &'static str,
    endpoints: EndpointList,
}

/// `GET /` — Service metadata.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Service metadata",
    description = "Returns service name, version, deployment mode, and \
                   the endpoint listing.",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo),
    )
)]
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfo {
            message: "Votebox API",
            version: env!("CARGO_PKG_VERSION"),
            mode: state.deployment_mode.as_str(),
            endpoints: EndpointList {
                health: "GET /health",
                vote: "POST /vote",
                results: "GET /results",
            },
        }),
    )
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
