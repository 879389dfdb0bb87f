//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear behavioral contracts.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{Word, WordError};

/// Length of every secret word and guess
pub const WORD_LENGTH: usize = 5;

/// Number of attempts a session allows
pub const MAX_GUESSES: usize = 6;
