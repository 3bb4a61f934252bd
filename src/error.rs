//! Errors for the few fallible surfaces of the crate.
//!
//! Decoding, matching and evolution are total and never produce these.

use thiserror::Error;

/// A rulestring that could not be read as an outer-totalistic B/S rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("empty rulestring")]
    Empty,
    #[error("rulestring {0:?} has no birth part")]
    MissingBirth(String),
    #[error("rulestring {0:?} has no survival part")]
    MissingSurvival(String),
    #[error("neighbour count {0:?} is not a digit in 0..=8")]
    InvalidCount(char),
    #[error("unexpected text {0:?} in rulestring")]
    Unexpected(String),
    #[error("birth on 0 neighbours would fill the empty plane")]
    BirthOnZero,
}
