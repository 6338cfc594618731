//! Request and response bodies for the vote and results endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::VoteTally;

/// Body of `POST /vote`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// Raw submitted choice; validated and normalized server-side.
    #[schema(example = "dog")]
    pub choice: String,
}

/// Success body of `POST /vote`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VoteAccepted {
    /// Human-readable confirmation.
    #[schema(example = "Vote recorded")]
    pub message: &'static str,
}

impl VoteAccepted {
    /// The one confirmation the endpoint ever returns.
    #[must_use]
    pub const fn recorded() -> Self {
        Self {
            message: "Vote recorded",
        }
    }
}

/// Body of `GET /results`: per-choice counts plus their sum.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResultsResponse {
    /// Votes for dogs.
    pub dogs: u64,
    /// Votes for cats.
    pub cats: u64,
    /// Sum of both counts.
    pub total: u64,
}

impl From<VoteTally> for ResultsResponse {
    fn from(tally: VoteTally) -> Self {
        Self {
            dogs: tally.dogs,
            cats: tally.cats,
            total: tally.total(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Choice;

    #[test]
    fn vote_request_deserializes_from_the_wire_shape() {
        let parsed: Option<VoteRequest> = serde_json::from_str(r#"{"choice": "dog"}"#).ok();
        let Some(req) = parsed else {
            panic!("deserialization failed");
        };
        assert_eq!(req.choice, "dog");
    }

    #[test]
    fn results_response_totals_the_tally() {
        let mut tally = VoteTally::default();
        tally.record(Choice::Dog, 2);
        tally.record(Choice::Cat, 1);

        let response = ResultsResponse::from(tally);
        assert_eq!(response.dogs, 2);
        assert_eq!(response.cats, 1);
        assert_eq!(response.total, 3);
    }

    #[test]
    fn results_response_keeps_zero_counts() {
        let json = serde_json::to_value(ResultsResponse::from(VoteTally::default())).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("dogs").and_then(serde_json::Value::as_u64), Some(0));
        assert_eq!(json.get("cats").and_then(serde_json::Value::as_u64), Some(0));
        assert_eq!(json.get("total").and_then(serde_json::Value::as_u64), Some(0));
    }

    #[test]
    fn accepted_message_matches_the_contract() {
        let json = serde_json::to_value(VoteAccepted::recorded()).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(
            json.get("message").and_then(serde_json::Value::as_str),
            Some("Vote recorded")
        );
    }
}
