//! Game session state machine
//!
//! A session owns the secret word, the append-only guess history, and the
//! current outcome. The presentation layer holds exactly one live session
//! and replaces it wholesale on replay; there is no shared global state.

use crate::core::{Feedback, MAX_GUESSES, Word, WordError};
use std::fmt;

/// Current state of a session
///
/// `Won` and `Lost` are terminal: a session in either state rejects further
/// guesses and never mutates again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// One submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Error type for rejected guess submissions
///
/// Every variant is a caller input problem: the session state is untouched
/// and no attempt is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess did not normalize to a valid 5-letter word
    InvalidWord(WordError),
    /// Session already reached Won or Lost
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::Finished => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::Finished => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// A single game against one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    history: Vec<GuessRecord>,
    outcome: Outcome,
}

impl GameSession {
    /// Start a new session around `secret`
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(MAX_GUESSES),
            outcome: Outcome::InProgress,
        }
    }

    /// Submit a raw guess string
    ///
    /// The guess is normalized and scored exactly once; the win check reuses
    /// the same feedback (win iff all positions are Correct), so the
    /// per-letter result and the outcome can never disagree.
    ///
    /// # Errors
    ///
    /// - `GameError::Finished` if the session already reached a terminal
    ///   outcome;
    /// - `GameError::InvalidWord` if `raw` is not exactly five ASCII
    ///   letters.
    ///
    /// A rejected submission consumes no attempt and mutates nothing.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Feedback, GameError> {
        if self.outcome != Outcome::InProgress {
            return Err(GameError::Finished);
        }

        let guess = Word::new(raw)?;
        let feedback = Feedback::score(&self.secret, &guess);

        self.history.push(GuessRecord {
            word: guess,
            feedback,
        });

        if feedback.is_win() {
            self.outcome = Outcome::Won;
        } else if self.history.len() >= MAX_GUESSES {
            self.outcome = Outcome::Lost;
        }

        Ok(feedback)
    }

    /// Current outcome
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Number of guesses still available
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    /// Submitted guesses with their feedback, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret word
    ///
    /// The shell reveals it on loss; nothing else should display it.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, WordError};

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn new_session_is_in_progress_and_empty() {
        let game = session("crane");
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.attempts_remaining(), MAX_GUESSES);
        assert!(game.history().is_empty());
    }

    #[test]
    fn correct_guess_wins_on_first_attempt() {
        let mut game = session("crane");
        let feedback = game.submit_guess("crane").unwrap();

        assert!(feedback.is_win());
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn win_is_case_insensitive() {
        let mut game = session("crane");
        game.submit_guess("CrAnE").unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn wrong_guess_stays_in_progress() {
        let mut game = session("crane");
        let feedback = game.submit_guess("slate").unwrap();

        assert!(!feedback.is_win());
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.attempts_remaining(), MAX_GUESSES - 1);
    }

    #[test]
    fn sixth_wrong_guess_loses_not_before() {
        let mut game = session("crane");
        let wrong = ["slate", "pilot", "mound", "bluff", "dizzy", "weird"];

        for (i, guess) in wrong.iter().enumerate() {
            assert_eq!(game.outcome(), Outcome::InProgress, "lost after {i}");
            game.submit_guess(guess).unwrap();
        }

        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.attempts_used(), MAX_GUESSES);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = session("crane");
        for guess in ["slate", "pilot", "mound", "bluff", "dizzy"] {
            game.submit_guess(guess).unwrap();
        }

        game.submit_guess("crane").unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.attempts_used(), MAX_GUESSES);
    }

    #[test]
    fn wrong_length_rejected_without_consuming_attempt() {
        let mut game = session("crane");

        let short = game.submit_guess("cran").unwrap_err();
        assert_eq!(
            short,
            GameError::InvalidWord(WordError::InvalidLength(4))
        );

        let long = game.submit_guess("cranes").unwrap_err();
        assert_eq!(
            long,
            GameError::InvalidWord(WordError::InvalidLength(6))
        );

        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn non_alphabetic_guess_rejected() {
        let mut game = session("crane");
        assert!(game.submit_guess("cr4ne").is_err());
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn any_five_letter_string_is_scored() {
        // Dictionary membership is not enforced by the session.
        let mut game = session("crane");
        let feedback = game.submit_guess("zzzzz").unwrap();
        assert_eq!(*feedback.statuses(), [LetterStatus::Absent; 5]);
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn terminal_session_rejects_further_guesses() {
        let mut game = session("crane");
        game.submit_guess("crane").unwrap();
        assert_eq!(game.outcome(), Outcome::Won);

        let err = game.submit_guess("slate").unwrap_err();
        assert_eq!(err, GameError::Finished);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn lost_session_is_immutable() {
        let mut game = session("crane");
        for guess in ["slate", "pilot", "mound", "bluff", "dizzy", "weird"] {
            game.submit_guess(guess).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Lost);

        assert_eq!(game.submit_guess("crane").unwrap_err(), GameError::Finished);
        assert_eq!(game.attempts_used(), MAX_GUESSES);
        assert_eq!(game.outcome(), Outcome::Lost);
    }

    #[test]
    fn history_preserves_order_and_feedback() {
        let mut game = session("crane");
        game.submit_guess("slate").unwrap();
        game.submit_guess("react").unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].word.text(), "SLATE");
        assert_eq!(history[1].word.text(), "REACT");
        assert_eq!(
            history[1].feedback,
            Feedback::score(game.secret(), &history[1].word)
        );
    }
}
