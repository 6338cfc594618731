//! Persistence layer: PostgreSQL vote storage.
//!
//! [`VoteStore`] owns the `sqlx::PgPool` and all SQL. Startup
//! connection establishment goes through the bounded [`RetryPolicy`]
//! so the service tolerates a database that is still coming up.

pub mod postgres;
pub mod retry;

pub use postgres::VoteStore;
pub use retry::RetryPolicy;
