//! Service layer: business logic orchestration.
//!
//! [`VoteService`] validates submissions, delegates persistence to the
//! [`crate::persistence::VoteStore`], and serves the read side.

pub mod vote_service;

pub use vote_service::VoteService;
