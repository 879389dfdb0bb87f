//! Terminal output formatting

pub mod formatters;

pub use formatters::{colored_keyboard, colored_tiles};
