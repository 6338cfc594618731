//! Vote service: admission control in front of the store.

use std::sync::Arc;

use crate::domain::{Choice, Vote, VoteTally};
use crate::error::VoteboxError;
use crate::persistence::VoteStore;

/// Orchestration layer for vote operations.
///
/// Stateless coordinator over the [`VoteStore`]: every submission is
/// validated before it reaches the store, so an invalid choice never
/// touches the database.
#[derive(Debug, Clone)]
pub struct VoteService {
    store: Arc<VoteStore>,
}

impl VoteService {
    /// Creates a new `VoteService`.
    #[must_use]
    pub fn new(store: Arc<VoteStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`VoteStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<VoteStore> {
        &self.store
    }

    /// Validates a raw submission and persists the vote.
    ///
    /// # Errors
    ///
    /// Returns [`VoteboxError::InvalidChoice`] without any store access
    /// when validation fails, or a storage error from the insert.
    pub async fn submit_vote(&self, raw_choice: &str) -> Result<Vote, VoteboxError> {
        let choice = Choice::parse(raw_choice)?;
        let vote = self.store.insert(choice).await?;
        tracing::info!(vote_id = %vote.id, choice = %vote.choice, "vote recorded");
        Ok(vote)
    }

    /// Returns the current per-choice counts.
    ///
    /// # Errors
    ///
    /// Returns a [`VoteboxError`] on database failure.
    pub async fn results(&self) -> Result<VoteTally, VoteboxError> {
        self.store.count_by_choice().await
    }

    /// Whether the backing store currently answers a liveness ping.
    pub async fn is_healthy(&self) -> bool {
        self.store.is_connected().await
    }
}
