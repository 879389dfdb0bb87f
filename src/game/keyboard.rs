//! Per-letter hint tracking for the on-screen keyboard
//!
//! Each letter keeps the best status seen across all submitted guesses,
//! with priority Correct > Present > Absent. A hint never downgrades: a
//! letter shown green stays green even if a later guess misplaces it.

use crate::core::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best-known status per guessed letter
#[derive(Debug, Clone, Default)]
pub struct KeyboardHints {
    hints: FxHashMap<u8, LetterStatus>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn observe(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, status) in guess.letters().iter().zip(feedback.iter()) {
            self.hints
                .entry(letter)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    /// Best-known status for a letter, `None` if never guessed
    #[must_use]
    pub fn status_of(&self, letter: u8) -> Option<LetterStatus> {
        self.hints.get(&letter.to_ascii_uppercase()).copied()
    }
}
