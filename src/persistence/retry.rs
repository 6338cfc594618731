//! Bounded retry with a fixed inter-attempt delay.
//!
//! Exists because the database is a separate process that may not be
//! ready when this service starts, as in containerized deployments.
//! The policy is a plain value so attempt count and delay are
//! independently testable with an injected fake operation.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::error::VoteboxError;

/// Retry policy: at most `max_attempts` tries, sleeping `delay` between
/// failures, giving up with [`VoteboxError::ConnectionExhausted`] once
/// the budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up.
    pub max_attempts: u32,
    /// Sleep between consecutive attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Creates a new policy.
    #[must_use]
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Runs `op` until it succeeds or the attempt budget is exhausted.
    ///
    /// `op` receives the 1-based attempt number. Each failure is logged
    /// at `warn` level; no sleep happens after the final attempt.
    ///
    /// # Errors
    ///
    /// Returns [`VoteboxError::ConnectionExhausted`] after
    /// `max_attempts` consecutive failures (immediately if
    /// `max_attempts` is 0).
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, VoteboxError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        for attempt in 1..=self.max_attempts {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "connection attempt failed"
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.delay).await;
                    }
                }
            }
        }
        Err(VoteboxError::ConnectionExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn returns_first_success_without_retrying() {
        let policy = RetryPolicy::new(30, Duration::from_secs(2));
        let calls = AtomicU32::new(0);

        let result = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, String>(7) }
            })
            .await;

        assert_eq!(result.ok(), Some(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_the_operation_succeeds() {
        let policy = RetryPolicy::new(30, Duration::from_secs(2));

        let result = policy
            .run(|attempt| async move {
                if attempt < 3 {
                    Err("not ready".to_string())
                } else {
                    Ok(attempt)
                }
            })
            .await;

        assert_eq!(result.ok(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_after_max_attempts() {
        let policy = RetryPolicy::new(5, Duration::from_secs(2));
        let calls = AtomicU32::new(0);

        let result = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>("connection refused".to_string()) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        let Err(VoteboxError::ConnectionExhausted { attempts }) = result else {
            panic!("expected ConnectionExhausted");
        };
        assert_eq!(attempts, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_fails_without_calling_the_operation() {
        let policy = RetryPolicy::new(0, Duration::from_secs(2));
        let calls = AtomicU32::new(0);

        let result = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<(), String>(()) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(matches!(
            result,
            Err(VoteboxError::ConnectionExhausted { attempts: 0 })
        ));
    }
}
