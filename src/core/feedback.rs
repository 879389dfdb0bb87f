//! Per-letter guess feedback
//!
//! Scoring compares a guess against the secret in two passes so duplicate
//! letters are never over-counted:
//! - pass 1 marks exact position matches (Correct) and consumes that secret
//!   position;
//! - pass 2 gives each remaining guess letter the leftmost unconsumed secret
//!   occurrence, if any (Present), otherwise the position stays Absent.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Status of one guessed letter at one position
///
/// Ordered `Absent < Present < Correct` so merging keyboard hints is a
/// plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not appear in the secret (gray)
    Absent,
    /// Letter appears elsewhere in the secret (yellow)
    Present,
    /// Letter is in the correct position (green)
    Correct,
}

/// Feedback for one submitted guess, one status per position
///
/// Immutable once produced by [`Feedback::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions Correct (a winning guess)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Both arguments are validated [`Word`]s, so the two inputs always have
    /// equal length and equal case; length mismatch is unrepresentable here.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterStatus, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(feedback.statuses()[2], LetterStatus::Correct);
    /// assert_eq!(feedback.statuses()[4], LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        // Per-position marker for secret letters already claimed by a guess
        // position. Each secret letter feeds at most one non-Absent status.
        let mut consumed = [false; WORD_LENGTH];

        // Pass 1: exact matches claim their own position first
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == secret.letter_at(i) {
                result[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        // Pass 2: remaining guess letters claim the leftmost unconsumed
        // occurrence in the secret, if one exists
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }

            let letter = guess.letter_at(i);
            if let Some(j) = (0..WORD_LENGTH)
                .find(|&j| !consumed[j] && secret.letter_at(j) == letter)
            {
                result[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Get the per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check whether every position is Correct
    ///
    /// Equivalent to the guess equalling the secret after normalization; the
    /// session's win check reuses this so feedback and outcome can never
    /// disagree.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Iterate over the statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&secret, &secret);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
