//! PostgreSQL implementation of the vote store.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::retry::RetryPolicy;
use crate::config::VoteboxConfig;
use crate::domain::{Choice, Vote, VoteId, VoteTally};
use crate::error::VoteboxError;

/// PostgreSQL-backed vote store using `sqlx::PgPool`.
///
/// Exclusively owns the `votes` table: all SQL in the crate lives here.
/// The table is append-only — this type exposes no update or delete.
#[derive(Debug, Clone)]
pub struct VoteStore {
    pool: PgPool,
}

impl VoteStore {
    /// Connects to PostgreSQL with bounded retry.
    ///
    /// Attempts up to `config.connect_max_attempts` connections,
    /// sleeping `config.connect_retry_delay_secs` between failures, so
    /// the service survives a database container that is still booting.
    ///
    /// # Errors
    ///
    /// Returns [`VoteboxError::ConnectionExhausted`] once the attempt
    /// budget is spent.
    pub async fn connect(config: &VoteboxConfig) -> Result<Self, VoteboxError> {
        let policy = RetryPolicy::new(
            config.connect_max_attempts,
            Duration::from_secs(config.connect_retry_delay_secs),
        );
        let url = config.database_url.clone();
        let max_connections = config.database_max_connections;
        let acquire_timeout = Duration::from_secs(config.database_connect_timeout_secs);

        let pool = policy
            .run(|_attempt| {
                let url = url.clone();
                async move {
                    PgPoolOptions::new()
                        .max_connections(max_connections)
                        .acquire_timeout(acquire_timeout)
                        .connect(&url)
                        .await
                }
            })
            .await?;

        tracing::info!("database connection established");
        Ok(Self { pool })
    }

    /// Wraps an existing pool. Used by integration tests.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotently creates the `votes` table and its choice index.
    ///
    /// Safe to call on every startup: `IF NOT EXISTS` on both
    /// statements makes a second call a no-op. The CHECK constraint
    /// re-validates choices at the storage boundary.
    ///
    /// # Errors
    ///
    /// Returns a [`VoteboxError`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), VoteboxError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS votes ( \
                 id BIGSERIAL PRIMARY KEY, \
                 choice VARCHAR(10) NOT NULL CHECK (choice IN ('dog', 'cat')), \
                 created_at TIMESTAMPTZ NOT NULL DEFAULT now() \
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(classify_write)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_votes_choice ON votes (choice)")
            .execute(&self.pool)
            .await
            .map_err(classify_write)?;

        tracing::info!("vote schema ensured");
        Ok(())
    }

    /// Appends a vote and returns the stored record with its
    /// store-assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`VoteboxError::WriteFailed`] when the row is rejected by
    /// a constraint and [`VoteboxError::StorageUnavailable`] when the
    /// backend cannot be reached.
    pub async fn insert(&self, choice: Choice) -> Result<Vote, VoteboxError> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            "INSERT INTO votes (choice) VALUES ($1) RETURNING id, created_at",
        )
        .bind(choice.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(classify_write)?;

        Ok(Vote {
            id: VoteId::from(id),
            choice,
            created_at,
        })
    }

    /// Counts votes per choice over the full table.
    ///
    /// Grouping aggregation with zero defaults: a choice with no votes
    /// reports 0, never a missing entry.
    ///
    /// # Errors
    ///
    /// Returns a [`VoteboxError`] on database failure.
    pub async fn count_by_choice(&self) -> Result<VoteTally, VoteboxError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT choice, COUNT(*) FROM votes GROUP BY choice",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify_read)?;

        let mut tally = VoteTally::default();
        for (stored, count) in rows {
            // The CHECK constraint keeps stored values inside the
            // accepted set; anything else would be external tampering.
            if let Ok(choice) = Choice::parse(&stored) {
                tally.record(choice, u64::try_from(count).unwrap_or(0));
            }
        }
        Ok(tally)
    }

    /// Liveness ping against the backing store.
    pub async fn is_connected(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }

    /// Releases the connection pool. Idempotent.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database connection closed");
    }
}

/// Maps a read-side `sqlx::Error` onto the service taxonomy.
fn classify_read(err: sqlx::Error) -> VoteboxError {
    match err {
        sqlx::Error::Database(db) => VoteboxError::Internal(db.to_string()),
        other => VoteboxError::StorageUnavailable(other.to_string()),
    }
}

/// Maps a write-side `sqlx::Error` onto the service taxonomy: database
/// rejections are [`VoteboxError::WriteFailed`], everything else means
/// the backend could not be reached.
fn classify_write(err: sqlx::Error) -> VoteboxError {
    match err {
        sqlx::Error::Database(db) => VoteboxError::WriteFailed(db.to_string()),
        other => VoteboxError::StorageUnavailable(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_classify_as_storage_unavailable() {
        let err = classify_write(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, VoteboxError::StorageUnavailable(_)));

        let err = classify_read(sqlx::Error::PoolClosed);
        assert!(matches!(err, VoteboxError::StorageUnavailable(_)));
    }
}
