//! Guess evaluation against a fixed answer
//!
//! Scoring follows Wordle's rules for repeated letters: the answer's letters
//! form a multiset, exact matches reserve their letter first, and only what is
//! left over can mark another position as present.

use super::{EvaluateError, GuessResult, LetterEvaluation, LetterState};
use log::debug;
use rustc_hash::FxHashMap;

/// Guesses allowed per round unless overridden
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Canonical comparison form of a character
///
/// Characters whose lowercase form is a single `char` are lowercased; the rest
/// (e.g. `'İ'`, which lowercases to two chars) are compared as-is so that
/// folding never changes a word's length.
#[inline]
#[must_use]
pub fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_case).collect()
}

/// Score a case-folded guess against a case-folded answer
///
/// Pure function behind [`GuessEvaluator::evaluate`]; it has no attempt
/// counter and may be called any number of times.
///
/// # Algorithm
/// 1. Count every letter of the answer
/// 2. First pass: mark exact matches `Correct` and consume their letters
/// 3. Second pass: mark remaining positions `Present` while the letter still
///    has unconsumed occurrences, otherwise `Absent`
///
/// # Errors
/// Returns [`EvaluateError::LengthMismatch`] if the slices differ in length.
///
/// # Examples
/// ```
/// use wordle_challenge::core::{LetterState, score};
///
/// let answer: Vec<char> = "those".chars().collect();
/// let guess: Vec<char> = "geese".chars().collect();
/// let states = score(&answer, &guess).unwrap();
///
/// // THOSE has a single e and the exact match at the end claims it
/// assert_eq!(states[1], LetterState::Absent);
/// assert_eq!(states[4], LetterState::Correct);
/// ```
pub fn score(answer: &[char], guess: &[char]) -> Result<Vec<LetterState>, EvaluateError> {
    if guess.len() != answer.len() {
        return Err(EvaluateError::LengthMismatch {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in answer {
        *remaining.entry(ch).or_insert(0) += 1;
    }

    let mut states = vec![LetterState::Absent; guess.len()];

    for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            states[i] = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (state, g) in states.iter_mut().zip(guess) {
        if state.is_correct() {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *state = LetterState::Present;
            *count -= 1;
        }
    }

    Ok(states)
}

/// Scores guesses against one answer and counts attempts
///
/// The evaluator only counts; it never refuses a guess because attempts ran
/// out. Ending the round is the caller's decision (see
/// [`Round`](crate::game::Round)).
///
/// # Examples
/// ```
/// use wordle_challenge::core::{GuessEvaluator, LetterState};
///
/// let mut evaluator = GuessEvaluator::new("stack").unwrap();
/// let result = evaluator.evaluate("CRASH").unwrap();
///
/// assert_eq!(result.symbols(), "Y-GY-");
/// assert!(!result.is_correct());
/// assert_eq!(evaluator.attempts(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GuessEvaluator {
    answer: String,
    letters: Vec<char>,
    attempts: usize,
    max_attempts: usize,
}

impl GuessEvaluator {
    /// Bind a new evaluator to `answer`
    ///
    /// The answer is stored case-folded. Any characters are accepted.
    ///
    /// # Errors
    /// Returns [`EvaluateError::EmptyAnswer`] if `answer` is empty.
    pub fn new(answer: &str) -> Result<Self, EvaluateError> {
        if answer.is_empty() {
            return Err(EvaluateError::EmptyAnswer);
        }

        let letters = fold(answer);
        Ok(Self {
            answer: letters.iter().collect(),
            letters,
            attempts: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Score `guess` and count it as one attempt
    ///
    /// Comparison is case-insensitive; the returned characters are the ones
    /// the caller passed in.
    ///
    /// # Errors
    /// Returns [`EvaluateError::LengthMismatch`] if `guess` does not have as
    /// many characters as the answer. The attempt counter is left untouched.
    pub fn evaluate(&mut self, guess: &str) -> Result<GuessResult, EvaluateError> {
        let states = score(&self.letters, &fold(guess))?;

        self.attempts += 1;

        let letters = guess
            .chars()
            .zip(states)
            .map(|(character, state)| LetterEvaluation { character, state })
            .collect();
        let result = GuessResult::new(letters, self.attempts);

        debug!(
            "attempt {}/{}: {guess} -> {}",
            self.attempts,
            self.max_attempts,
            result.symbols()
        );

        Ok(result)
    }

    /// Canonical (case-folded) answer
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Answer uppercased for "reveal answer" displays
    #[must_use]
    pub fn answer_display(&self) -> String {
        self.answer.to_uppercase()
    }

    /// Answer length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept alongside [`len`](Self::len)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Case-folded letter at `position`, if any
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }
}
