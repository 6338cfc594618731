//! REST endpoint handlers organized by resource.

pub mod results;
pub mod system;
pub mod vote;

use axum::Router;

use crate::app_state::AppState;

/// Composes all routes at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(vote::routes())
        .merge(results::routes())
        .merge(system::routes())
}
