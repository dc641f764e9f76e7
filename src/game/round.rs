//! A single game round
//!
//! Wraps a [`GuessEvaluator`] with the policy it leaves to callers: when the
//! round ends, which guesses are acceptable, and what the player has learned
//! so far.

use super::{GameConfig, GameError};
use crate::core::{GuessEvaluator, GuessResult, LetterState, fold_case};
use log::{info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// An answer letter the player has not placed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

#[derive(Debug, Clone)]
pub struct Round {
    evaluator: GuessEvaluator,
    history: Vec<GuessResult>,
    status: RoundStatus,
    dictionary: Option<FxHashSet<String>>,
}

impl Round {
    /// Start a round against `answer`
    ///
    /// # Errors
    /// - [`GameError::Evaluate`] if `answer` is empty
    /// - [`GameError::NoAttempts`] if `max_attempts` is zero
    pub fn new(answer: &str, max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        let evaluator = GuessEvaluator::new(answer)?.with_max_attempts(max_attempts);
        info!(
            "new round: {} letters, {max_attempts} attempts",
            evaluator.len()
        );

        Ok(Self {
            evaluator,
            history: Vec::new(),
            status: RoundStatus::InProgress,
            dictionary: None,
        })
    }

    /// Start a round using the limits from `config`
    ///
    /// # Errors
    /// Same as [`Round::new`].
    pub fn from_config(answer: &str, config: &GameConfig) -> Result<Self, GameError> {
        Self::new(answer, config.max_attempts)
    }

    /// Only accept guesses found in `words` (compared case-insensitively)
    #[must_use]
    pub fn with_dictionary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = words.into_iter().map(|w| fold(w.as_ref())).collect();
        self.dictionary = Some(dictionary);
        self
    }

    /// Submit a guess
    ///
    /// Rejected guesses leave the round untouched and do not use an attempt.
    ///
    /// # Errors
    /// - [`GameError::RoundOver`] once the round is won or lost
    /// - [`GameError::Evaluate`] if the guess length does not match
    /// - [`GameError::NotInWordList`] if a dictionary is set and lacks the guess
    pub fn submit(&mut self, guess: &str) -> Result<&GuessResult, GameError> {
        if self.status.is_over() {
            return Err(GameError::RoundOver);
        }

        if guess.chars().count() == self.evaluator.len()
            && let Some(dictionary) = &self.dictionary
            && !dictionary.contains(&fold(guess))
        {
            warn!("rejected guess not in word list: {guess}");
            return Err(GameError::NotInWordList(guess.to_string()));
        }

        let result = self.evaluator.evaluate(guess).inspect_err(|e| {
            warn!("rejected guess {guess}: {e}");
        })?;

        if result.is_correct() {
            self.status = RoundStatus::Won {
                attempts: result.attempt(),
            };
            info!("round won in {} attempts", result.attempt());
        } else if self.evaluator.is_exhausted() {
            self.status = RoundStatus::Lost;
            info!("round lost, answer was {}", self.evaluator.answer());
        }

        self.history.push(result);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Give up and reveal the answer
    ///
    /// Has no effect on a round that is already over.
    pub fn forfeit(&mut self) -> String {
        if !self.status.is_over() {
            self.status = RoundStatus::Lost;
            info!("round forfeited after {} attempts", self.attempts());
        }
        self.reveal()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn evaluator(&self) -> &GuessEvaluator {
        &self.evaluator
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.evaluator.attempts()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.evaluator.max_attempts()
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.evaluator.attempts_remaining()
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.evaluator.len()
    }

    /// Answer in display casing
    #[must_use]
    pub fn reveal(&self) -> String {
        self.evaluator.answer_display()
    }

    /// Share of attempts used, in `[0, 1]`
    #[must_use]
    pub fn progress(&self) -> f64 {
        let max = self.max_attempts();
        (self.attempts().min(max) as f64) / (max as f64)
    }

    /// Best state seen so far for every guessed letter
    ///
    /// Keys are case-folded. `Correct` outranks `Present`, which outranks
    /// `Absent`, so a letter never loses information on a later guess.
    #[must_use]
    pub fn keyboard(&self) -> FxHashMap<char, LetterState> {
        let mut keys: FxHashMap<char, LetterState> = FxHashMap::default();
        for letter in self.history.iter().flat_map(GuessResult::letters) {
            let entry = keys.entry(fold_case(letter.character)).or_default();
            *entry = entry.strongest(letter.state);
        }
        keys
    }

    /// The first position no guess has solved yet, with its answer letter
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        let solved = |position: usize| {
            self.history
                .iter()
                .any(|r| r.letters()[position].state.is_correct())
        };

        (0..self.word_length())
            .find(|&position| !solved(position))
            .and_then(|position| {
                self.evaluator
                    .letter_at(position)
                    .map(|letter| Hint { position, letter })
            })
    }
}

fn fold(word: &str) -> String {
    word.chars().map(fold_case).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EvaluateError;
    use crate::game::AnswerSource;
    use pretty_assertions::assert_eq;

    fn round(answer: &str) -> Round {
        Round::new(answer, 6).unwrap()
    }

    #[test]
    fn correct_guess_wins() {
        let mut r = round("stack");
        r.submit("crash").unwrap();
        assert_eq!(r.status(), RoundStatus::InProgress);

        assert!(r.submit("STACK").unwrap().is_correct());
        assert_eq!(r.status(), RoundStatus::Won { attempts: 2 });
        assert_eq!(r.history().len(), 2);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut r = Round::new("stack", 3).unwrap();
        for guess in ["crash", "brine", "plumb"] {
            r.submit(guess).unwrap();
        }
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.attempts_remaining(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut r = Round::new("stack", 2).unwrap();
        r.submit("crash").unwrap();
        r.submit("stack").unwrap();
        assert_eq!(r.status(), RoundStatus::Won { attempts: 2 });
    }

    #[test]
    fn finished_round_rejects_guesses() {
        let mut r = round("stack");
        r.submit("stack").unwrap();

        assert_eq!(r.submit("crash").unwrap_err(), GameError::RoundOver);
        assert_eq!(r.attempts(), 1);
    }

    #[test]
    fn wrong_length_does_not_use_attempt() {
        let mut r = round("stack");
        assert_eq!(
            r.submit("stacks").unwrap_err(),
            GameError::Evaluate(EvaluateError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(r.attempts(), 0);
        assert!(r.history().is_empty());
    }

    #[test]
    fn dictionary_rejects_unknown_words_without_using_attempt() {
        let mut r = round("stack").with_dictionary(["stack", "crash", "BRINE"]);

        assert_eq!(
            r.submit("zzzzz").unwrap_err(),
            GameError::NotInWordList("zzzzz".to_string())
        );
        assert_eq!(r.attempts(), 0);

        r.submit("brine").unwrap();
        r.submit("Crash").unwrap();
        assert_eq!(r.attempts(), 2);
    }

    #[test]
    fn dictionary_check_reports_length_first() {
        let mut r = round("stack").with_dictionary(["stack"]);
        assert!(matches!(
            r.submit("abc"),
            Err(GameError::Evaluate(EvaluateError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn empty_answer_is_rejected() {
        assert_eq!(
            Round::new("", 6).unwrap_err(),
            GameError::Evaluate(EvaluateError::EmptyAnswer)
        );
    }

    #[test]
    fn zero_attempts_is_rejected() {
        assert_eq!(Round::new("stack", 0).unwrap_err(), GameError::NoAttempts);

        let mut config = GameConfig::new(AnswerSource::Random);
        config.max_attempts = 0;
        assert_eq!(
            Round::from_config("stack", &config).unwrap_err(),
            GameError::NoAttempts
        );
    }

    #[test]
    fn single_attempt_round_ends_after_one_guess() {
        let mut r = Round::new("stack", 1).unwrap();
        assert_eq!(r.status(), RoundStatus::InProgress);
        r.submit("crash").unwrap();
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.submit("stack").unwrap_err(), GameError::RoundOver);
    }

    #[test]
    fn from_config_uses_max_attempts() {
        let mut config = GameConfig::new(AnswerSource::Random);
        config.max_attempts = 4;
        let r = Round::from_config("stack", &config).unwrap();
        assert_eq!(r.max_attempts(), 4);
    }

    #[test]
    fn keyboard_keeps_strongest_state() {
        let mut r = round("stack");
        // a: correct, s/c: present, r/h: absent
        r.submit("CRASH").unwrap();
        // s: correct now, a: present here but stays correct
        r.submit("sassy").unwrap();

        let keys = r.keyboard();
        assert_eq!(keys[&'a'], LetterState::Correct);
        assert_eq!(keys[&'s'], LetterState::Correct);
        assert_eq!(keys[&'c'], LetterState::Present);
        assert_eq!(keys[&'r'], LetterState::Absent);
        assert_eq!(keys[&'y'], LetterState::Absent);
        assert!(!keys.contains_key(&'k'));
    }

    #[test]
    fn hint_skips_solved_positions() {
        let mut r = round("stack");
        assert_eq!(
            r.hint(),
            Some(Hint {
                position: 0,
                letter: 's'
            })
        );

        r.submit("sassy").unwrap();
        assert_eq!(
            r.hint(),
            Some(Hint {
                position: 1,
                letter: 't'
            })
        );

        r.submit("stack").unwrap();
        assert_eq!(r.hint(), None);
    }

    #[test]
    fn progress_tracks_attempts() {
        let mut r = Round::new("stack", 4).unwrap();
        assert!(r.progress().abs() < f64::EPSILON);
        r.submit("crash").unwrap();
        assert!((r.progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn forfeit_ends_round_and_reveals() {
        let mut r = round("stack");
        assert_eq!(r.forfeit(), "STACK");
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.submit("stack").unwrap_err(), GameError::RoundOver);
    }

    #[test]
    fn forfeit_after_win_keeps_win() {
        let mut r = round("stack");
        r.submit("stack").unwrap();
        r.forfeit();
        assert_eq!(r.status(), RoundStatus::Won { attempts: 1 });
    }
}
