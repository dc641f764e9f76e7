//! One-shot guess scoring

use crate::core::{EvaluateError, GuessEvaluator, GuessResult};

/// Score `guess` against `answer` without a round around it
///
/// # Errors
///
/// Returns an error if:
/// - `answer` is empty
/// - `guess` and `answer` differ in length
pub fn score_guess(answer: &str, guess: &str) -> Result<GuessResult, EvaluateError> {
    GuessEvaluator::new(answer)?.evaluate(guess)
}
