//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize one list entry, or drop it
///
/// Keeps entries of exactly `length` ASCII letters, lowercased.
fn normalize(entry: &str, length: usize) -> Option<String> {
    let word = entry.trim();
    (word.len() == length && word.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| word.to_ascii_lowercase())
}

/// Load words of `length` letters from a newline-delimited file
///
/// Blank lines, wrong-length entries and entries with non-letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_challenge::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines(), length);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Filter an embedded slice down to valid words of `length` letters
///
/// # Examples
/// ```
/// use wordle_challenge::wordlists::loader::words_from_slice;
/// use wordle_challenge::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<String> {
    words_from_lines(slice.iter().copied(), length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<String> {
    lines.filter_map(|line| normalize(line, length)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_from_slice_normalizes_case() {
        let words = words_from_slice(&["Crane", " SLATE ", "irate"], 5);
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "cr4ne", "", "slate"];
        let words = words_from_slice(input, 5);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_other_lengths() {
        let input = &["crane", "toolong", "abc", "quiz"];
        assert_eq!(words_from_slice(input, 4), vec!["quiz"]);
        assert_eq!(words_from_slice(input, 7), vec!["toolong"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }

    #[test]
    fn load_from_file_filters_lines() {
        let path = std::env::temp_dir().join(format!(
            "wordle_challenge_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "stack\n\nCRASH\nnope\nbrine\n").unwrap();

        let words = load_from_file(&path, 5).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(words, vec!["stack", "crash", "brine"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("/definitely/not/a/wordlist.txt", 5);
        assert!(result.is_err());
    }
}
