//! The closed set of accepted vote choices.
//!
//! [`Choice`] is the admission-control point of the whole service:
//! every submitted vote passes through [`Choice::parse`] before any
//! write reaches the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VoteboxError;

/// One of the two categories a vote may express.
///
/// Canonical wire strings are `"dog"` and `"cat"`. Parsing is lenient
/// about whitespace and letter case; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// A vote for dogs.
    Dog,
    /// A vote for cats.
    Cat,
}

impl Choice {
    /// Both accepted choices, in canonical order.
    pub const ALL: [Self; 2] = [Self::Dog, Self::Cat];

    /// Normalizes raw input (trim, case-fold) and checks membership in
    /// the accepted set.
    ///
    /// # Errors
    ///
    /// Returns [`VoteboxError::InvalidChoice`] carrying the trimmed
    /// input when the normalized value is not `"dog"` or `"cat"`.
    pub fn parse(raw: &str) -> Result<Self, VoteboxError> {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            _ => Err(VoteboxError::InvalidChoice(trimmed.to_string())),
        }
    }

    /// Returns the canonical lowercase string, as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_strings() {
        assert_eq!(Choice::parse("dog").ok(), Some(Choice::Dog));
        assert_eq!(Choice::parse("cat").ok(), Some(Choice::Cat));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Choice::parse("Dog").ok(), Some(Choice::Dog));
        assert_eq!(Choice::parse("CAT").ok(), Some(Choice::Cat));
        assert_eq!(Choice::parse("dOg").ok(), Some(Choice::Dog));
    }

    #[test]
    fn parsing_trims_whitespace() {
        assert_eq!(Choice::parse("  dog  ").ok(), Some(Choice::Dog));
        assert_eq!(Choice::parse("\tcat\n").ok(), Some(Choice::Cat));
    }

    #[test]
    fn rejects_anything_outside_the_set() {
        for raw in ["fish", "dogs", "cats", "", "  ", "dog cat"] {
            let Err(err) = Choice::parse(raw) else {
                panic!("expected {raw:?} to be rejected");
            };
            let VoteboxError::InvalidChoice(rejected) = err else {
                panic!("expected InvalidChoice, got {err}");
            };
            assert_eq!(rejected, raw.trim());
        }
    }

    #[test]
    fn rejection_detail_names_the_input() {
        let Err(err) = Choice::parse("fish") else {
            panic!("expected rejection");
        };
        assert!(err.to_string().contains("fish"));
    }

    #[test]
    fn canonical_string_round_trips() {
        for choice in Choice::ALL {
            assert_eq!(Choice::parse(choice.as_str()).ok(), Some(choice));
        }
    }

    #[test]
    fn serde_uses_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Choice::Dog).ok().as_deref(), Some("\"dog\""));
        let parsed: Option<Choice> = serde_json::from_str("\"cat\"").ok();
        assert_eq!(parsed, Some(Choice::Cat));
    }
}
