//! Daily Challenge - CLI
//!
//! Play the daily word, a practice round, or score a single guess.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_challenge::{
    commands::{daily_info, run_play, score_guess},
    core::DEFAULT_MAX_ATTEMPTS,
    game::{
        AnswerSource, DEFAULT_WORD_LENGTH, GameConfig, Round, RoundStatus, challenge_number,
    },
    logging,
    output::print_score_result,
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_challenge",
    about = "Guess the daily five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited answer list (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guesses allowed per round
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = parse_attempts
    )]
    max_attempts: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round (default: today's daily challenge)
    Play {
        /// Play against a specific word
        #[arg(short, long, conflicts_with_all = ["random", "date"])]
        answer: Option<String>,

        /// Play against a random word from the list
        #[arg(short, long, conflicts_with = "date")]
        random: bool,

        /// Play the daily challenge for another date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Only accept guesses from the word list
        #[arg(short, long)]
        strict: bool,
    },

    /// Score one guess against an answer
    Score {
        /// The secret word
        answer: String,

        /// The guess to score
        guess: String,
    },

    /// Show the daily challenge number
    Daily {
        /// Date to look up (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },
}

fn parse_attempts(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("a round needs at least one attempt".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Load the answer list based on the -w flag
fn load_words(wordlist: Option<&PathBuf>, length: usize) -> Result<Vec<String>> {
    let words = match wordlist {
        Some(path) => load_from_file(path, length)
            .with_context(|| format!("failed to load word list {}", path.display()))?,
        None => words_from_slice(ANSWERS, length),
    };

    if words.is_empty() {
        bail!("word list contains no {length}-letter words");
    }
    info!("using {} answer words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        random: false,
        date: None,
        strict: false,
    });

    match command {
        Commands::Play {
            answer,
            random,
            date,
            strict,
        } => {
            let source = match (answer, random) {
                (Some(word), _) => AnswerSource::Fixed(word),
                (None, true) => AnswerSource::Random,
                (None, false) => AnswerSource::Daily(date.unwrap_or_else(today)),
            };
            let mut config = GameConfig::new(source);
            config.max_attempts = cli.max_attempts;
            config.strict = strict;

            let words = load_words(cli.wordlist.as_ref(), config.word_length)?;
            run_play_command(&config, &words)
        }
        Commands::Score { answer, guess } => {
            let result = score_guess(&answer, &guess).context("cannot score guess")?;
            print_score_result(&answer, &result);
            Ok(())
        }
        Commands::Daily { date, reveal } => {
            let words = load_words(cli.wordlist.as_ref(), DEFAULT_WORD_LENGTH)?;
            run_daily_command(date.unwrap_or_else(today), reveal, &words)
        }
    }
}

fn run_play_command(config: &GameConfig, words: &[String]) -> Result<()> {
    let answer = config
        .resolve_answer(words, &mut rand::rng())
        .context("no answer available for this round")?;

    let challenge = match &config.answer {
        AnswerSource::Daily(date) => challenge_number(*date),
        AnswerSource::Random | AnswerSource::Fixed(_) => None,
    };

    let mut round = Round::from_config(&answer, config)?;
    if config.strict {
        round = round.with_dictionary(words);
    }

    let round = run_play(round, challenge, io::stdin().lock(), io::stdout().lock())?;
    if round.status() == RoundStatus::InProgress {
        info!(
            "left round after {} of {} attempts",
            round.attempts(),
            round.max_attempts()
        );
    }
    Ok(())
}

fn run_daily_command(date: NaiveDate, reveal: bool, words: &[String]) -> Result<()> {
    let Some(info) = daily_info(date, words) else {
        bail!("no daily challenge on {date}");
    };

    println!(
        "{} {}",
        "Daily Challenge".bright_cyan().bold(),
        format!("#{}", info.number).bright_yellow().bold()
    );
    println!("Date: {}", info.date);
    if reveal {
        println!("Answer: {}", info.answer.to_uppercase().bright_green().bold());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_attempts_defaults_to_six() {
        let cli = Cli::try_parse_from(["wordle_challenge", "daily"]).unwrap();
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn max_attempts_rejects_zero() {
        assert!(Cli::try_parse_from(["wordle_challenge", "-m", "0", "play"]).is_err());
        assert!(Cli::try_parse_from(["wordle_challenge", "-m", "x", "play"]).is_err());

        let cli = Cli::try_parse_from(["wordle_challenge", "play", "-m", "1"]).unwrap();
        assert_eq!(cli.max_attempts, 1);
    }
}
