//! Evaluation result for a single guess

use super::LetterState;

/// One scored position: the character the caller submitted and its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEvaluation {
    pub character: char,
    pub state: LetterState,
}

/// Per-position feedback for one guess, left to right
///
/// Characters are kept exactly as the caller passed them; only the comparison
/// is case-folded. Display casing is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    letters: Vec<LetterEvaluation>,
    attempt: usize,
}

impl GuessResult {
    #[must_use]
    pub(crate) const fn new(letters: Vec<LetterEvaluation>, attempt: usize) -> Self {
        Self { letters, attempt }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterEvaluation] {
        &self.letters
    }

    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.letters.iter().map(|l| l.state)
    }

    /// 1-based attempt number this result was produced on
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True iff every position is `Correct`
    #[must_use]
    pub fn is_correct(&self) -> bool {
        !self.letters.is_empty() && self.states().all(LetterState::is_correct)
    }

    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.states().filter(|&s| s == state).count()
    }

    /// The guess as submitted
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.character).collect()
    }

    /// Feedback as `G`/`Y`/`-` codes, e.g. `"-YG-G"`
    #[must_use]
    pub fn symbols(&self) -> String {
        self.states().map(LetterState::symbol).collect()
    }

    /// Feedback as an emoji row, e.g. `"⬜🟨🟩⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states().map(LetterState::emoji).collect()
    }
}
