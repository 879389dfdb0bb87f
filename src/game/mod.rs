//! Game state machine, word selection, and keyboard hints

mod keyboard;
mod selector;
mod session;

pub use keyboard::KeyboardHints;
pub use selector::{EPOCH, SelectorError, daily_word, random_word};
pub use session::{GameError, GameSession, GuessRecord, Outcome};
