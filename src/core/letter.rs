//! Per-letter feedback states
//!
//! Each guessed letter is classified against the answer as one of:
//! - `Correct`: right letter, right position (green)
//! - `Present`: letter is in the answer at another position (yellow)
//! - `Absent`: no unreserved occurrence left in the answer (gray)
//!
//! `Empty` exists for blank tiles only and is never produced by evaluation.

use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LetterState {
    #[default]
    Empty,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// All states produced by evaluation, weakest first
    pub const SCORED: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Strength used when merging feedback from several guesses
    ///
    /// A letter seen as `Correct` anywhere stays `Correct` on the keyboard even
    /// if a later guess places it elsewhere.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Keep whichever of the two states carries more information
    #[inline]
    #[must_use]
    pub const fn strongest(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Single-character code: `G`, `Y`, `-`, or `.` for an empty tile
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => '.',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '⬛',
        }
    }

    /// Parse a feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_challenge::core::LetterState;
    ///
    /// assert_eq!(LetterState::from_char('g'), Some(LetterState::Correct));
    /// assert_eq!(LetterState::from_char('🟨'), Some(LetterState::Present));
    /// assert_eq!(LetterState::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
