//! Round configuration

use super::{daily_answer, random_answer};
use crate::core::DEFAULT_MAX_ATTEMPTS;
use chrono::NaiveDate;
use rand::Rng;

/// Letters per word in the daily challenge
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Where a round's answer comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// Answer of the day for the given date
    Daily(NaiveDate),
    /// Random pick from the answer list
    Random,
    /// A specific word
    Fixed(String),
}

/// Configuration for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub answer: AnswerSource,
    pub max_attempts: usize,
    pub word_length: usize,
    /// Reject guesses missing from the word list
    pub strict: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(answer: AnswerSource) -> Self {
        Self {
            answer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
            strict: false,
        }
    }

    /// Pick the answer this configuration describes
    ///
    /// Returns `None` when the word list cannot supply one (empty list, or a
    /// date before the daily epoch).
    pub fn resolve_answer<S, R>(&self, words: &[S], rng: &mut R) -> Option<String>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        match &self.answer {
            AnswerSource::Fixed(word) => Some(word.clone()),
            AnswerSource::Daily(date) => daily_answer(*date, words).map(str::to_string),
            AnswerSource::Random => random_answer(rng, words).map(str::to_string),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(AnswerSource::Daily(chrono::Local::now().date_naive()))
    }
}
