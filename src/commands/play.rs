//! Interactive round
//!
//! Line-oriented play over any reader/writer pair: stdin/stdout from the CLI,
//! in-memory buffers from tests.

use crate::game::{GameError, Round};
use crate::output::{write_board, write_keyboard, write_outcome, write_progress};
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

enum Input {
    Guess(String),
    Hint,
    Reveal,
    Quit,
}

/// Commands only apply when the input cannot be a guess, so a word that
/// happens to spell a command is still playable as an answer.
fn parse_input(line: &str, word_length: usize) -> Input {
    if line.chars().count() == word_length {
        return Input::Guess(line.to_string());
    }
    match line.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Input::Quit,
        "hint" | "?" => Input::Hint,
        "reveal" | "give up" => Input::Reveal,
        _ => Input::Guess(line.to_string()),
    }
}

/// Play `round` to completion
///
/// Returns the round as it stands when play stops: won, lost, or still in
/// progress if the player quit or input ran out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, W>(
    mut round: Round,
    challenge: Option<u64>,
    mut input: R,
    mut out: W,
) -> Result<Round>
where
    R: BufRead,
    W: Write,
{
    let title = challenge.map_or_else(
        || "Practice Round".to_string(),
        |n| format!("Daily Challenge #{n}"),
    );
    writeln!(out, "\n{}", title.bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Commands: 'hint', 'reveal', 'quit'",
        round.word_length(),
        round.max_attempts()
    )?;

    loop {
        write_board(&mut out, &round)?;
        write_progress(&mut out, &round)?;
        write_keyboard(&mut out, &round)?;

        write!(out, "Guess: ")?;
        out.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read guess")?;
        if read == 0 {
            debug!("input closed, leaving round in progress");
            writeln!(out)?;
            return Ok(round);
        }

        match parse_input(line.trim(), round.word_length()) {
            Input::Quit => {
                writeln!(out, "\nBye! The word will still be here.")?;
                return Ok(round);
            }
            Input::Hint => match round.hint() {
                Some(hint) => writeln!(
                    out,
                    "\n💡 Letter {} is {}",
                    hint.position + 1,
                    hint.letter.to_uppercase().to_string().bright_yellow().bold()
                )?,
                None => writeln!(out, "\n💡 Every position is already solved")?,
            },
            Input::Reveal => {
                round.forfeit();
                write_board(&mut out, &round)?;
                write_outcome(&mut out, &round, challenge)?;
                return Ok(round);
            }
            Input::Guess(guess) if guess.is_empty() => {}
            Input::Guess(guess) => match round.submit(&guess).map(|_| ()) {
                Ok(()) if round.status().is_over() => {
                    write_board(&mut out, &round)?;
                    write_outcome(&mut out, &round, challenge)?;
                    return Ok(round);
                }
                Ok(()) => {}
                Err(GameError::RoundOver) => return Ok(round),
                Err(e) => writeln!(out, "\n❌ {e}")?,
            },
        }
    }
}
