//! Daily Wordle - CLI
//!
//! Daily word-guessing game with TUI and plain CLI modes. The secret word
//! is a pure function of the calendar date; `--random` replays with a
//! uniform draw instead.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use wordle_daily::{
    commands::{PlayConfig, run_play},
    core::Word,
    game::{EPOCH, daily_word, random_word},
    wordlists::{ALLOWED, TARGETS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play a random word instead of today's daily word
    #[arg(short, long, global = true)]
    random: bool,

    /// Play the daily word for a specific date (YYYY-MM-DD)
    #[arg(short, long, global = true, conflicts_with = "random")]
    date: Option<NaiveDate>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Reject guesses that are not in the allowed word list
    #[arg(short, long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load wordlists based on the -w flag
///
/// Returns (`targets`, `allowed`). A custom file serves as both the target
/// pool and the allowed-guess list.
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_daily::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => {
            let targets = words_from_slice(TARGETS);
            let allowed = words_from_slice(ALLOWED);
            Ok((targets, allowed))
        }
        path => {
            let custom = load_from_file(path)
                .with_context(|| format!("failed to load word list from '{path}'"))?;
            anyhow::ensure!(!custom.is_empty(), "word list '{path}' has no valid words");
            Ok((custom.clone(), custom))
        }
    }
}

/// Pick the secret word for the first game
fn select_secret(cli: &Cli, targets: &[Word]) -> Result<Word> {
    let secret = if cli.random {
        random_word(targets, &mut rand::rng())?
    } else {
        let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
        daily_word(date, EPOCH, targets)?
    };

    log::debug!("secret selected (random: {})", cli.random);
    Ok(secret)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (targets, allowed) = load_wordlists(&cli.wordlist)?;
    let secret = select_secret(&cli, &targets)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use wordle_daily::interactive::{App, run_tui};

            let app = App::new(secret, &targets, &allowed, cli.strict);
            run_tui(app)
        }
        Commands::Simple => {
            let config = PlayConfig {
                secret,
                targets: &targets,
                allowed: &allowed,
                strict: cli.strict,
            };
            run_play(&config).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
