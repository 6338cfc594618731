//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::DeploymentMode;
use crate::service::VoteService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor. Constructed once at startup — there is no
/// process-wide global handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Vote service for all business logic.
    pub vote_service: Arc<VoteService>,
    /// Deployment mode reported by the health and root endpoints.
    pub deployment_mode: DeploymentMode,
}
