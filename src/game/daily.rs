//! Answer selection
//!
//! The daily answer is a pure function of the calendar date, so every player
//! gets the same word on the same day without any shared state.

use chrono::NaiveDate;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Day #0 of the daily challenge
pub const DAILY_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid daily epoch"),
};

/// Days elapsed since [`DAILY_EPOCH`], or `None` for earlier dates
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_challenge::game::challenge_number;
///
/// let date = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
/// assert_eq!(challenge_number(date), Some(1));
/// ```
#[must_use]
pub fn challenge_number(date: NaiveDate) -> Option<u64> {
    let days = date.signed_duration_since(DAILY_EPOCH).num_days();
    u64::try_from(days).ok()
}

/// The answer for `date`, cycling through `words` in order
///
/// Returns `None` if `words` is empty or `date` precedes the epoch.
#[must_use]
pub fn daily_answer<S: AsRef<str>>(date: NaiveDate, words: &[S]) -> Option<&str> {
    if words.is_empty() {
        return None;
    }
    let number = challenge_number(date)?;
    let index = (number % words.len() as u64) as usize;
    Some(words[index].as_ref())
}

/// Uniformly random answer for practice rounds
pub fn random_answer<'a, S, R>(rng: &mut R, words: &'a [S]) -> Option<&'a str>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    words.choose(rng).map(AsRef::as_ref)
}
