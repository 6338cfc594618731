//! # votebox
//!
//! REST API backend for a two-option voting service.
//!
//! Accepts a vote for one of two fixed choices (`dog` or `cat`), persists
//! it in PostgreSQL, and reports aggregate counts. The vote table is
//! append-only — rows are never updated or deleted.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── VoteService (service/)
//!     │
//!     ├── Choice / VoteTally (domain/)
//!     │
//!     └── VoteStore → PostgreSQL (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
