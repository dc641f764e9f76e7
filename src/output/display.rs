//! Display functions for rounds and command results
//!
//! Everything writes to a caller-supplied `Write` so the interactive loop can
//! be driven from memory.

use super::formatters::{create_progress_bar, empty_row, keyboard_rows, share_grid, tile_row};
use crate::core::{GuessResult, LetterState};
use crate::game::{Round, RoundStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: one row per guess, then blanks for unused attempts
///
/// # Errors
/// Propagates write failures.
pub fn write_board<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    for result in round.history() {
        writeln!(out, "  {}", tile_row(result))?;
    }
    if !round.status().is_over() {
        for _ in round.history().len()..round.max_attempts() {
            writeln!(out, "  {}", empty_row(round.word_length()))?;
        }
    }
    writeln!(out)
}

/// Write the keyboard with letter states
///
/// # Errors
/// Propagates write failures.
pub fn write_keyboard<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let keys = round.keyboard();
    for (indent, row) in keyboard_rows(&keys).iter().enumerate() {
        writeln!(out, "  {}{row}", " ".repeat(indent))?;
    }
    writeln!(out)
}

/// Write attempts used with a progress bar
///
/// # Errors
/// Propagates write failures.
pub fn write_progress<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let bar = create_progress_bar(round.progress(), 1.0, round.max_attempts());
    writeln!(
        out,
        "  Attempts: {}/{} [{}]",
        round.attempts(),
        round.max_attempts(),
        bar.bright_black()
    )
}

/// Write the end-of-round banner and share grid
///
/// # Errors
/// Propagates write failures.
pub fn write_outcome<W: Write>(
    out: &mut W,
    round: &Round,
    challenge: Option<u64>,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    match round.status() {
        RoundStatus::Won { attempts } => {
            let praise = match attempts {
                1 => "Genius!",
                2 => "Magnificent!",
                3 => "Impressive!",
                4 => "Splendid!",
                5 => "Great!",
                _ => "Phew!",
            };
            writeln!(out, "  {}", praise.bright_green().bold())?;
            writeln!(
                out,
                "  Solved in {attempts} {}",
                if attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        RoundStatus::Lost => {
            writeln!(out, "  {}", "Out of guesses".red().bold())?;
            writeln!(
                out,
                "  The word was {}",
                round.reveal().bright_yellow().bold()
            )?;
        }
        RoundStatus::InProgress => {}
    }
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out)?;
    writeln!(out, "{}", share_grid(round, challenge))?;
    writeln!(out)
}

/// Print the result of a one-shot evaluation
pub fn print_score_result(answer: &str, result: &GuessResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.word().to_uppercase().bright_white().bold(),
        answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", tile_row(result));
    println!("  {}\n", result.to_emoji());

    for letter in result.letters() {
        println!("  {}  {}", letter.character.to_uppercase(), letter.state);
    }

    println!();
    if result.is_correct() {
        println!("{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "{} correct, {} present, {} absent",
            result.count(LetterState::Correct).to_string().green(),
            result.count(LetterState::Present).to_string().yellow(),
            result.count(LetterState::Absent)
        );
    }
}
