//! TUI application state and logic

use crate::core::{MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::{GameError, GameSession, KeyboardHints, Outcome, random_word};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession,
    pub hints: KeyboardHints,
    pub targets: &'a [Word],
    pub allowed: &'a [Word],
    pub strict: bool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Player is typing guesses
    Typing,
    /// Session reached Won or Lost; waiting for replay or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(secret: Word, targets: &'a [Word], allowed: &'a [Word], strict: bool) -> Self {
        Self {
            session: GameSession::new(secret),
            hints: KeyboardHints::new(),
            targets,
            allowed,
            strict,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Submit the typed buffer as a guess
    pub fn submit_current(&mut self) {
        let raw = self.input_buffer.clone();

        if self.strict
            && let Ok(guess) = Word::new(&raw)
            && !self.allowed.contains(&guess)
        {
            self.add_message(
                &format!("'{}' is not in the word list", guess.text()),
                MessageStyle::Error,
            );
            return;
        }

        let feedback = match self.session.submit_guess(&raw) {
            Ok(feedback) => feedback,
            Err(GameError::InvalidWord(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
            Err(GameError::Finished) => {
                self.input_mode = InputMode::GameOver;
                return;
            }
        };

        let last = self
            .session
            .history()
            .last()
            .expect("history non-empty after accepted guess");
        self.hints.observe(&last.word, &feedback);
        self.input_buffer.clear();

        match self.session.outcome() {
            Outcome::InProgress => {
                self.add_message(
                    &format!("{} attempts left", self.session.attempts_remaining()),
                    MessageStyle::Info,
                );
            }
            Outcome::Won => self.handle_win(),
            Outcome::Lost => self.handle_loss(),
        }
    }

    fn handle_win(&mut self) {
        let attempts = self.session.attempts_used();
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        self.stats.guess_distribution[attempts] += 1;
        self.input_mode = InputMode::GameOver;

        let celebration = match attempts {
            1 => "🎯 GENIUS! First try! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ IMPRESSIVE! Three guesses! ✨",
            4 => "👏 SPLENDID! Four guesses! 👏",
            5 => "🎉 GREAT! Five guesses! 🎉",
            _ => "😅 PHEW! Got it in six! 😅",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn handle_loss(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        self.add_message(
            &format!("😔 Out of guesses! The word was {}", self.session.secret()),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a replay with a random word
    ///
    /// The old session is replaced wholesale; nothing carries over except
    /// the process-lifetime statistics.
    pub fn new_game(&mut self) {
        match random_word(self.targets, &mut rand::rng()) {
            Ok(secret) => {
                self.session = GameSession::new(secret);
                self.hints = KeyboardHints::new();
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Typing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.stats.total_games == 0 {
            0.0
        } else {
            self.stats.games_won as f64 / self.stats.total_games as f64 * 100.0
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In game-over mode, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn typing_respects_word_length() {
        let targets = words(&["crane"]);
        let mut app = App::new(Word::new("crane").unwrap(), &targets, &targets, false);

        for c in "slates".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "SLATE");

        app.pop_letter();
        assert_eq!(app.input_buffer, "SLAT");
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let targets = words(&["crane"]);
        let mut app = App::new(Word::new("crane").unwrap(), &targets, &targets, false);

        app.input_buffer = "CRANE".to_string();
        app.submit_current();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn invalid_guess_keeps_buffer_and_attempts() {
        let targets = words(&["crane"]);
        let mut app = App::new(Word::new("crane").unwrap(), &targets, &targets, false);

        app.input_buffer = "CRA".to_string();
        app.submit_current();

        assert_eq!(app.input_buffer, "CRA");
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let targets = words(&["crane", "slate"]);
        let mut app = App::new(Word::new("crane").unwrap(), &targets, &targets, true);

        app.input_buffer = "ZZZZZ".to_string();
        app.submit_current();
        assert_eq!(app.session.attempts_used(), 0);

        app.input_buffer = "SLATE".to_string();
        app.submit_current();
        assert_eq!(app.session.attempts_used(), 1);
    }

    #[test]
    fn losing_updates_stats_and_reveals_via_message() {
        let targets = words(&["crane"]);
        let mut app = App::new(Word::new("crane").unwrap(), &targets, &targets, false);

        for _ in 0..6 {
            app.input_buffer = "SLATE".to_string();
            app.submit_current();
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("CRANE")),
            "loss message should reveal the secret"
        );
    }

    #[test]
    fn new_game_resets_session_but_keeps_stats() {
        let targets = words(&["crane"]);
        let mut app = App::new(Word::new("crane").unwrap(), &targets, &targets, false);

        app.input_buffer = "CRANE".to_string();
        app.submit_current();
        assert_eq!(app.stats.games_won, 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.stats.games_won, 1);
    }
}
