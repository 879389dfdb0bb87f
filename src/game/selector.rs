//! Secret word selection
//!
//! The daily word is a pure function of the calendar date: days elapsed
//! since a fixed epoch, modulo the word list length. Replay uses a uniform
//! random draw instead.

use crate::core::Word;
use chrono::NaiveDate;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// First day of the daily-word calendar (2024-01-01)
///
/// Index 0 of the word list is that day's word.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => unreachable!(),
};

/// Error type for word selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// The word list has no entries to select from
    EmptyWordList,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for SelectorError {}

/// Select the daily word for `date`
///
/// Deterministic: the same date, epoch, and word list always yield the same
/// word, and dates exactly `words.len()` days apart repeat. Dates before the
/// epoch index with a euclidean remainder, so they are valid rather than
/// undefined.
///
/// # Errors
///
/// Returns `SelectorError::EmptyWordList` if `words` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::core::Word;
/// use wordle_daily::game::{EPOCH, daily_word};
///
/// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(daily_word(date, EPOCH, &words).unwrap().text(), "SLATE");
/// ```
pub fn daily_word(
    date: NaiveDate,
    epoch: NaiveDate,
    words: &[Word],
) -> Result<Word, SelectorError> {
    if words.is_empty() {
        return Err(SelectorError::EmptyWordList);
    }

    let days_since_epoch = (date - epoch).num_days();
    let len = words.len() as i64;
    let index = days_since_epoch.rem_euclid(len) as usize;

    log::debug!("daily word: {days_since_epoch} days since epoch, index {index}");
    Ok(words[index].clone())
}

/// Select a uniformly random word for replay
///
/// No guarantee the draw differs from the current session's secret.
///
/// # Errors
///
/// Returns `SelectorError::EmptyWordList` if `words` is empty.
pub fn random_word<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Word, SelectorError> {
    words
        .choose(rng)
        .cloned()
        .ok_or(SelectorError::EmptyWordList)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_day_selects_first_word() {
        let list = words(&["crane", "slate", "pilot"]);
        assert_eq!(daily_word(EPOCH, EPOCH, &list).unwrap().text(), "CRANE");
    }

    #[test]
    fn consecutive_days_walk_the_list() {
        let list = words(&["crane", "slate", "pilot"]);
        assert_eq!(
            daily_word(date(2024, 1, 2), EPOCH, &list).unwrap().text(),
            "SLATE"
        );
        assert_eq!(
            daily_word(date(2024, 1, 3), EPOCH, &list).unwrap().text(),
            "PILOT"
        );
        // Wraps back around
        assert_eq!(
            daily_word(date(2024, 1, 4), EPOCH, &list).unwrap().text(),
            "CRANE"
        );
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let list = words(&["crane", "slate", "pilot", "mound", "bluff"]);
        let day = date(2025, 7, 19);
        let first = daily_word(day, EPOCH, &list).unwrap();
        let second = daily_word(day, EPOCH, &list).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn list_length_apart_repeats() {
        let list = words(&["crane", "slate", "pilot", "mound", "bluff"]);
        let day = date(2024, 3, 10);
        let later = day + chrono::Days::new(list.len() as u64);

        assert_eq!(
            daily_word(day, EPOCH, &list).unwrap(),
            daily_word(later, EPOCH, &list).unwrap()
        );
    }

    #[test]
    fn dates_before_epoch_index_validly() {
        let list = words(&["crane", "slate", "pilot"]);
        // One day before the epoch: -1.rem_euclid(3) == 2
        assert_eq!(
            daily_word(date(2023, 12, 31), EPOCH, &list).unwrap().text(),
            "PILOT"
        );
        // Far in the past still lands inside the list
        let word = daily_word(date(1999, 1, 1), EPOCH, &list).unwrap();
        assert!(list.contains(&word));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            daily_word(EPOCH, EPOCH, &[]),
            Err(SelectorError::EmptyWordList)
        );

        let mut rng = rand::rng();
        assert_eq!(random_word(&[], &mut rng), Err(SelectorError::EmptyWordList));
    }

    #[test]
    fn random_word_draws_from_the_list() {
        let list = words(&["crane", "slate", "pilot"]);
        let mut rng = rand::rng();

        for _ in 0..20 {
            let word = random_word(&list, &mut rng).unwrap();
            assert!(list.contains(&word));
        }
    }
}
