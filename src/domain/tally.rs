//! Per-choice vote counts.

use serde::Serialize;

use super::Choice;

/// Aggregate vote counts, one slot per accepted choice.
///
/// Always carries both choices: a choice with no votes reports 0, never
/// a missing entry. Absence of data is not absence of a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    /// Number of votes for [`Choice::Dog`].
    pub dogs: u64,
    /// Number of votes for [`Choice::Cat`].
    pub cats: u64,
}

impl VoteTally {
    /// Adds `count` votes for `choice`.
    pub const fn record(&mut self, choice: Choice, count: u64) {
        match choice {
            Choice::Dog => self.dogs += count,
            Choice::Cat => self.cats += count,
        }
    }

    /// Returns the count for a single choice.
    #[must_use]
    pub const fn count_for(&self, choice: Choice) -> u64 {
        match choice {
            Choice::Dog => self.dogs,
            Choice::Cat => self.cats,
        }
    }

    /// Total number of votes across both choices.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.dogs + self.cats
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_reports_zero_for_both_choices() {
        let tally = VoteTally::default();
        assert_eq!(tally.count_for(Choice::Dog), 0);
        assert_eq!(tally.count_for(Choice::Cat), 0);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn total_is_the_sum_of_both_counts() {
        let mut tally = VoteTally::default();
        tally.record(Choice::Dog, 2);
        tally.record(Choice::Cat, 1);
        assert_eq!(tally.dogs, 2);
        assert_eq!(tally.cats, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn record_accumulates() {
        let mut tally = VoteTally::default();
        tally.record(Choice::Dog, 1);
        tally.record(Choice::Dog, 1);
        assert_eq!(tally.count_for(Choice::Dog), 2);
    }

    #[test]
    fn serializes_both_keys_even_when_empty() {
        let json = serde_json::to_value(VoteTally::default()).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("dogs").and_then(serde_json::Value::as_u64), Some(0));
        assert_eq!(json.get("cats").and_then(serde_json::Value::as_u64), Some(0));
    }
}
