//! Vote submission endpoint handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{VoteAccepted, VoteRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, VoteboxError};

/// `POST /vote` — Record a vote.
///
/// # Errors
///
/// Returns [`VoteboxError`] when the choice fails validation or the
/// store rejects the write.
#[utoipa::path(
    post,
    path = "/vote",
    tag = "Votes",
    summary = "Record a vote",
    description = "Validates the submitted choice (`dog` or `cat`, \
                   case- and whitespace-insensitive) and appends it to \
                   the vote table.",
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = VoteAccepted),
        (status = 400, description = "Choice outside the accepted set", body = ErrorResponse),
        (status = 500, description = "Write rejected by the store", body = ErrorResponse),
        (status = 503, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(req): Json<VoteRequest>,
) -> Result<impl IntoResponse, VoteboxError> {
    state.vote_service.submit_vote(&req.choice).await?;
    Ok(Json(VoteAccepted::recorded()))
}

/// Vote routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/vote", post(submit_vote))
}
