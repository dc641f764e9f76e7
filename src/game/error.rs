use crate::core::EvaluateError;
use thiserror::Error;

/// Reasons a round refuses a guess
///
/// None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error("a round needs at least one attempt")]
    NoAttempts,

    #[error("the round is already over")]
    RoundOver,

    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}
