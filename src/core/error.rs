//! Error types for guess evaluation

use thiserror::Error;

/// Errors raised by [`GuessEvaluator`](super::GuessEvaluator).
///
/// A rejected call never mutates the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("guess must be exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("answer must not be empty")]
    EmptyAnswer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message_names_both_lengths() {
        let err = EvaluateError::LengthMismatch {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "guess must be exactly 5 letters, got 4");
    }

    #[test]
    fn empty_answer_message() {
        assert_eq!(
            EvaluateError::EmptyAnswer.to_string(),
            "answer must not be empty"
        );
    }
}
