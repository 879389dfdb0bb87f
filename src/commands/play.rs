//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI, for dumb terminals and pipes.

use crate::core::{MAX_GUESSES, Word};
use crate::game::{GameError, GameSession, KeyboardHints, Outcome, random_word};
use crate::output::{colored_keyboard, colored_tiles};
use std::io::{self, Write};

/// Configuration for the simple CLI mode
pub struct PlayConfig<'a> {
    /// Secret word for the first game
    pub secret: Word,
    /// Replay pool for games after the first
    pub targets: &'a [Word],
    /// Accepted guesses when `strict` is on
    pub allowed: &'a [Word],
    /// Reject guesses that are not in the allowed list
    pub strict: bool,
}

/// Run the simple CLI game loop
///
/// # Errors
///
/// Returns an error if reading user input fails or if a replay cannot draw
/// a new secret word.
pub fn run_play(config: &PlayConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Daily Wordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {MAX_GUESSES}-letter word in {MAX_GUESSES} tries.");
    println!("After each guess the tiles show green (right spot), yellow");
    println!("(wrong spot), or gray (not in the word).\n");
    println!("Commands: 'quit' to exit, 'new' to restart with a random word\n");

    let mut session = GameSession::new(config.secret.clone());
    let mut hints = KeyboardHints::new();

    loop {
        let prompt = format!(
            "Guess {}/{MAX_GUESSES}",
            session.attempts_used() + 1
        );
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = new_random_session(config)?;
                hints = KeyboardHints::new();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if config.strict
            && let Ok(guess) = Word::new(&input)
            && !config.allowed.contains(&guess)
        {
            println!("❌ '{}' is not in the word list\n", guess.text());
            continue;
        }

        let feedback = match session.submit_guess(&input) {
            Ok(feedback) => feedback,
            Err(GameError::InvalidWord(e)) => {
                println!("❌ {e}\n");
                continue;
            }
            Err(GameError::Finished) => {
                // Unreachable while the loop resets finished sessions,
                // but handle it the typed way regardless.
                session = new_random_session(config)?;
                hints = KeyboardHints::new();
                continue;
            }
        };

        let last = session
            .history()
            .last()
            .expect("history non-empty after accepted guess");
        hints.observe(&last.word, &feedback);

        print_board(&session, &hints);

        match session.outcome() {
            Outcome::InProgress => {}
            Outcome::Won => {
                print_win_banner(&session);
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session = new_random_session(config)?;
                hints = KeyboardHints::new();
            }
            Outcome::Lost => {
                println!("\n😔 Out of guesses! The word was {}\n", session.secret());
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session = new_random_session(config)?;
                hints = KeyboardHints::new();
            }
        }
    }
}

/// Draw a fresh session with a random secret (replay semantics)
fn new_random_session(config: &PlayConfig) -> Result<GameSession, String> {
    let secret = random_word(config.targets, &mut rand::rng()).map_err(|e| e.to_string())?;
    log::debug!("replay started");
    Ok(GameSession::new(secret))
}

fn print_board(session: &GameSession, hints: &KeyboardHints) {
    println!();
    for record in session.history() {
        println!("  {}", colored_tiles(&record.word, &record.feedback));
    }
    println!("\n{}\n", colored_keyboard(hints));
}

fn print_win_banner(session: &GameSession) {
    use colored::Colorize;

    let attempts = session.attempts_used();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  Y O U   G O T   I T !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match attempts {
        1 => ("🏆 Genius!", "Incredible hole-in-one!"),
        2 => ("⭐ Magnificent!", "Outstanding performance!"),
        3 => ("💫 Impressive!", "Very well played!"),
        4 => ("✨ Splendid!", "Nice work!"),
        5 => ("👍 Great!", "Got it!"),
        _ => ("😅 Phew!", "That was close!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.text().bright_white().bold(),
            record.feedback.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
