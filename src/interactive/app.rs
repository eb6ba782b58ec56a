//! TUI application state and logic

use crate::game::{Effect, Game, snapshot};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Application state
pub struct App<'a, R: Rng> {
    pub game: Game<'a, R>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub state_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(game: Game<'a, R>, state_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            should_quit: false,
            state_path,
        };
        app.add_message(
            "Guess the five-letter word in six tries.",
            MessageStyle::Info,
        );
        app.add_message("Type letters, Enter to submit, Esc to quit.", MessageStyle::Info);
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.game.state().is_over() {
            if matches!(
                code,
                KeyCode::Enter | KeyCode::Char('r' | 'R' | 'n' | 'N')
            ) {
                let effects = self.game.replay();
                self.apply_effects(&effects);
            }
            return;
        }

        let draft = self.game.state().draft().unwrap_or_default().to_string();
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let effects = self.game.edit(&format!("{draft}{c}"));
                self.apply_effects(&effects);
            }
            KeyCode::Backspace => {
                let mut shorter = draft;
                shorter.pop();
                let effects = self.game.edit(&shorter);
                self.apply_effects(&effects);
            }
            KeyCode::Enter => {
                if draft.len() == crate::core::WORD_LENGTH {
                    let effects = self.game.submit(&draft);
                    self.apply_effects(&effects);
                } else {
                    self.add_message("Not enough letters!", MessageStyle::Error);
                }
            }
            _ => {}
        }
    }

    /// Turn effects into user-facing messages
    pub fn apply_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Rejected(rejection) => {
                    self.add_message(&rejection.to_string(), MessageStyle::Error);
                }
                Effect::GameOver { won: true, guesses, .. } => {
                    let celebration = match *guesses {
                        1 => "🎯 HOLE IN ONE! YOU WON!",
                        2 => "🔥 MAGNIFICENT! YOU WON!",
                        3 => "✨ SPLENDID! YOU WON!",
                        4 => "👏 GREAT JOB! YOU WON!",
                        5 => "🎉 NICE WORK! YOU WON!",
                        _ => "😅 PHEW! YOU WON!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press Enter or 'r' to replay.", MessageStyle::Info);
                }
                Effect::GameOver {
                    won: false, secret, ..
                } => {
                    self.add_message(
                        &format!("YOU LOST! The word was: {secret}"),
                        MessageStyle::Error,
                    );
                    self.add_message("Press Enter or 'r' to replay.", MessageStyle::Info);
                }
                Effect::BoardReset => {
                    self.messages.clear();
                    self.add_message("New game started!", MessageStyle::Info);
                }
                Effect::DraftChanged { .. }
                | Effect::RevealGuess { .. }
                | Effect::HistoryChanged(_)
                | Effect::ActivateSlot(_) => {}
            }
        }
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

    /// Save the game if a state file was configured
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.state_path {
            snapshot::save_to_file(path, self.game.state())
                .with_context(|| format!("saving game to {}", path.display()))?;
            info!(path = %path.display(), "Game saved");
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// The terminal is restored and the game saved even when the event loop
/// fails.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if saving the game fails.
#[instrument(skip(app))]
pub fn run_tui<R: Rng>(mut app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    finish(&app, res, restore_terminal(&mut terminal))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Save the game, then report the first failure of loop, cleanup or save
fn finish<R: Rng>(app: &App<'_, R>, res: Result<()>, restored: Result<()>) -> Result<()> {
    let saved = app.save();
    if let Err(err) = &res {
        warn!(error = %err, "Event loop failed");
    }
    res.and(restored).and(saved)
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::game::GameState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(dictionary: &Dictionary) -> App<'_, StdRng> {
        let game = Game::with_state(
            dictionary,
            StdRng::seed_from_u64(2),
            GameState::new(Word::new("crane").unwrap()),
        );
        App::new(game, None)
    }

    fn type_word<R: Rng>(app: &mut App<'_, R>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn typing_builds_draft() {
        let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
        let mut app = app(&dictionary);

        for c in "tr4ac".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.game.state().draft(), Some("TRAC"));

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.game.state().draft(), Some("TRA"));
    }

    #[test]
    fn draft_is_capped_at_five_letters() {
        let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
        let mut app = app(&dictionary);

        for c in "tracers".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.game.state().draft(), Some("TRACE"));
    }

    #[test]
    fn short_submission_shows_error() {
        let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
        let mut app = app(&dictionary);
        type_word(&mut app, "tra");

        assert_eq!(app.game.state().turns_used(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn invalid_word_shows_error() {
        let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
        let mut app = app(&dictionary);
        type_word(&mut app, "qwert");

        assert_eq!(app.game.state().turns_used(), 0);
        let last = app.messages.last().unwrap();
        assert!(last.text.starts_with("INVALID WORD!"));
    }

    #[test]
    fn winning_then_replay() {
        let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
        let mut app = app(&dictionary);
        type_word(&mut app, "trace");
        type_word(&mut app, "crane");

        assert_eq!(app.game.state().outcome(), Some(true));
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success && m.text.contains("YOU WON"))
        );

        // Letters are ignored once the game is over
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(app.game.state().is_over());

        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.game.state().active_slot(), Some(0));
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn escape_quits() {
        let dictionary = Dictionary::from_entries(["crane"]).unwrap();
        let mut app = app(&dictionary);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_but_c_types() {
        let dictionary = Dictionary::from_entries(["crane"]).unwrap();
        let mut app = app(&dictionary);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert_eq!(app.game.state().draft(), Some("C"));

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let dictionary = Dictionary::from_entries(["crane"]).unwrap();
        let mut app = app(&dictionary);
        for _ in 0..10 {
            app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        }
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn failed_event_loop_still_saves_game() {
        let dictionary = Dictionary::from_entries(["crane", "trace"]).unwrap();
        let path = std::env::temp_dir().join(format!("wordgame-tui-{}.json", std::process::id()));
        let game = Game::with_state(
            &dictionary,
            StdRng::seed_from_u64(2),
            GameState::new(Word::new("crane").unwrap()),
        );
        let mut app = App::new(game, Some(path.clone()));
        type_word(&mut app, "trace");
        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE);

        let res = finish(&app, Err(anyhow::anyhow!("read failed")), Ok(()));
        assert!(res.is_err());

        let saved = snapshot::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&saved, app.game.state());
        assert_eq!(saved.draft(), Some("C"));
    }
}
