//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterEvaluation, LetterState};
use crate::game::{Round, RoundStatus};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Color a piece of text the way a tile in `state` is drawn
#[must_use]
pub fn paint(text: &str, state: LetterState) -> ColoredString {
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Empty => text.normal(),
    }
}

/// A single colored tile, letter uppercased
#[must_use]
pub fn tile(letter: &LetterEvaluation) -> ColoredString {
    let text = format!(" {} ", letter.character.to_uppercase());
    paint(&text, letter.state)
}

/// All tiles of a guess on one line
#[must_use]
pub fn tile_row(result: &GuessResult) -> String {
    result
        .letters()
        .iter()
        .map(|letter| tile(letter).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder row for an attempt not yet used
#[must_use]
pub fn empty_row(length: usize) -> String {
    vec![" _ "; length].join(" ")
}

/// Keyboard with each guessed letter colored by its best known state
#[must_use]
pub fn keyboard_rows(keys: &FxHashMap<char, LetterState>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    let state = keys.get(&c).copied().unwrap_or_default();
                    paint(&c.to_ascii_uppercase().to_string(), state).to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Spoiler-free result grid, e.g.
///
/// ```text
/// Daily Challenge #12 3/6
///
/// ⬜🟨🟩⬜⬜
/// 🟩🟨⬜⬜⬜
/// 🟩🟩🟩🟩🟩
/// ```
///
/// A lost round scores `X`. Without a challenge number the header reads
/// `Practice`.
#[must_use]
pub fn share_grid(round: &Round, challenge: Option<u64>) -> String {
    let title = challenge.map_or_else(
        || "Practice".to_string(),
        |n| format!("Daily Challenge #{n}"),
    );
    let score = match round.status() {
        RoundStatus::Won { attempts } => attempts.to_string(),
        RoundStatus::Lost | RoundStatus::InProgress => "X".to_string(),
    };

    let mut grid = format!("{title} {score}/{}\n", round.max_attempts());
    for result in round.history() {
        grid.push('\n');
        grid.push_str(&result.to_emoji());
    }
    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn tile_row_uppercases_letters() {
        plain();
        let mut round = Round::new("stack", 6).unwrap();
        let result = round.submit("crash").unwrap();
        assert_eq!(tile_row(result), " C   R   A   S   H ");
    }

    #[test]
    fn empty_row_has_one_slot_per_letter() {
        assert_eq!(empty_row(3), " _   _   _ ");
        assert_eq!(empty_row(0), "");
    }

    #[test]
    fn keyboard_has_three_rows() {
        plain();
        let rows = keyboard_rows(&FxHashMap::default());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], "Z X C V B N M");
    }

    #[test]
    fn share_grid_for_win() {
        let mut round = Round::new("stack", 6).unwrap();
        round.submit("crash").unwrap();
        round.submit("sassy").unwrap();
        round.submit("stack").unwrap();

        assert_eq!(
            share_grid(&round, Some(12)),
            "Daily Challenge #12 3/6\n\n🟨⬜🟩🟨⬜\n🟩🟨⬜⬜⬜\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_for_loss() {
        let mut round = Round::new("stack", 2).unwrap();
        round.submit("brine").unwrap();
        round.submit("brine").unwrap();

        assert_eq!(share_grid(&round, None), "Practice X/2\n\n⬜⬜⬜⬜⬜\n⬜⬜⬜⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 6.0, 6);
        assert_eq!(bar, "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(6.0, 6.0, 6);
        assert_eq!(bar, "██████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(3.0, 6.0, 6);
        assert_eq!(bar, "███░░░");
    }

    #[test]
    fn progress_bar_zero_max_is_full() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "████");
    }
}
