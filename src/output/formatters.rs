//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::KeyboardHints;
use colored::Colorize;

/// QWERTY layout for the hint keyboard
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render a scored guess as colored tiles
///
/// Green background for correct positions, yellow for misplaced letters,
/// dim for absent ones.
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, status)| {
            let tile = format!(" {letter} ");
            match status {
                LetterStatus::Correct => tile.black().on_green().to_string(),
                LetterStatus::Present => tile.black().on_yellow().to_string(),
                LetterStatus::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Render the QWERTY keyboard with per-letter hint colors
///
/// Letters never guessed stay uncolored.
#[must_use]
pub fn colored_keyboard(hints: &KeyboardHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = " ".repeat(i);
            let keys: String = row
                .bytes()
                .map(|letter| {
                    let key = format!("{} ", letter as char);
                    match hints.status_of(letter) {
                        Some(LetterStatus::Correct) => key.black().on_green().to_string(),
                        Some(LetterStatus::Present) => key.black().on_yellow().to_string(),
                        Some(LetterStatus::Absent) => {
                            key.bright_black().to_string()
                        }
                        None => key,
                    }
                })
                .collect();
            format!("{indent}{keys}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn tiles_contain_every_letter() {
        colored::control::set_override(false);

        let secret = word("slate");
        let guess = word("crane");
        let tiles = colored_tiles(&guess, &Feedback::score(&secret, &guess));

        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(tiles.contains(letter), "missing {letter} in {tiles}");
        }
    }

    #[test]
    fn keyboard_renders_three_rows() {
        colored::control::set_override(false);

        let keyboard = colored_keyboard(&KeyboardHints::new());
        let lines: Vec<&str> = keyboard.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('Q'));
        assert!(lines[2].contains('M'));
    }
}
