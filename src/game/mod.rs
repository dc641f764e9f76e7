//! Round policy and answer selection
//!
//! The evaluator counts attempts but never ends a game. This module owns
//! that decision, plus picking which word a round is played against.

mod config;
mod daily;
mod error;
mod round;

pub use config::{AnswerSource, DEFAULT_WORD_LENGTH, GameConfig};
pub use daily::{DAILY_EPOCH, challenge_number, daily_answer, random_answer};
pub use error::GameError;
pub use round::{Hint, Round, RoundStatus};
