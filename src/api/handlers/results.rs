//! Aggregate results endpoint handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::ResultsResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, VoteboxError};

/// `GET /results` — Current per-choice vote counts.
///
/// Both counts are always present; a choice with no votes reports 0.
///
/// # Errors
///
/// Returns [`VoteboxError`] when the store cannot be queried.
#[utoipa::path(
    get,
    path = "/results",
    tag = "Votes",
    summary = "Fetch vote results",
    description = "Returns the number of votes per choice and their total.",
    responses(
        (status = 200, description = "Current counts", body = ResultsResponse),
        (status = 503, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn get_results(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, VoteboxError> {
    let tally = state.vote_service.results().await?;
    Ok(Json(ResultsResponse::from(tally)))
}

/// Results routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/results", get(get_results))
}
