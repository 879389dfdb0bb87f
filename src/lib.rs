//! Daily Wordle
//!
//! A daily word-guessing game for the terminal: six tries to find a
//! five-letter word, with per-letter feedback after every guess. The secret
//! is derived deterministically from the calendar date, so everyone gets
//! the same puzzle on the same day; replays draw a random word instead.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::Word;
//! use wordle_daily::game::{GameSession, Outcome};
//!
//! let secret = Word::new("crane").unwrap();
//! let mut session = GameSession::new(secret);
//!
//! let feedback = session.submit_guess("slate").unwrap();
//! println!("{feedback}");
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Game state machine and word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
