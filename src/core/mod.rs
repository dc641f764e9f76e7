//! Core guess evaluation
//!
//! Pure scoring with no I/O and no rendering. Everything a UI needs comes back
//! as data: per-letter states, the correct flag, and attempt counts.

mod error;
mod evaluator;
mod letter;
mod result;

pub use error::EvaluateError;
pub use evaluator::{DEFAULT_MAX_ATTEMPTS, GuessEvaluator, fold_case, score};
pub use letter::LetterState;
pub use result::{GuessResult, LetterEvaluation};
