//! Command implementations

pub mod play;

pub use play::{PlayConfig, run_play};
