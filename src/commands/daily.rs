//! Daily challenge lookup

use crate::game::{challenge_number, daily_answer};
use chrono::NaiveDate;

/// Today's challenge: its number and answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyInfo {
    pub date: NaiveDate,
    pub number: u64,
    pub answer: String,
}

/// Look up the challenge for `date`
///
/// Returns `None` if `date` precedes the daily epoch or `words` is empty.
#[must_use]
pub fn daily_info<S: AsRef<str>>(date: NaiveDate, words: &[S]) -> Option<DailyInfo> {
    let number = challenge_number(date)?;
    let answer = daily_answer(date, words)?.to_string();
    Some(DailyInfo {
        date,
        number,
        answer,
    })
}
