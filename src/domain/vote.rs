//! The immutable vote record and its identifier.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Choice;

/// Unique identifier for a persisted vote.
///
/// Wraps the `BIGSERIAL` primary key the store assigns on insert:
/// monotonically increasing, unique, immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteId(i64);

impl VoteId {
    /// Returns the raw row id.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VoteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<VoteId> for i64 {
    fn from(id: VoteId) -> Self {
        id.0
    }
}

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded vote as returned by the store on insert.
///
/// Votes are append-only: created exactly once per accepted submission,
/// never mutated, never deleted. Both `id` and `created_at` are assigned
/// by the store, not the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vote {
    /// Store-assigned row identifier.
    pub id: VoteId,
    /// The choice this vote expresses.
    pub choice: Choice,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn vote_id_orders_by_insertion() {
        assert!(VoteId::from(1) < VoteId::from(2));
    }

    #[test]
    fn vote_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&VoteId::from(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));
    }

    #[test]
    fn vote_id_display_is_the_row_id() {
        assert_eq!(VoteId::from(7).to_string(), "7");
        assert_eq!(VoteId::from(7).as_i64(), 7);
    }
}
