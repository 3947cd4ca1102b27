//! TUI application state and logic

use crate::core::{GameState, InputEvent, Outcome, Transition};
use crate::output::outcome_message;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub game: GameState,
    pub source: Box<dyn WordSource>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
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

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(InputEvent),
    NewGame,
    Quit,
}

/// Map a key press to an action
///
/// While a game is running every letter is game input. Once it has ended,
/// `n` or Enter start a new game and `q` quits.
#[must_use]
pub fn key_to_action(key: KeyEvent, game_over: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match (key.code, game_over) {
        (KeyCode::Esc, _) | (KeyCode::Char('q' | 'Q'), true) => Some(Action::Quit),
        (KeyCode::Char('n' | 'N') | KeyCode::Enter, true) => Some(Action::NewGame),
        (KeyCode::Char(c), false) if c.is_ascii_alphabetic() => {
            Some(Action::Input(InputEvent::Letter(c.to_ascii_uppercase())))
        }
        (KeyCode::Backspace | KeyCode::Delete, false) => Some(Action::Input(InputEvent::Delete)),
        (KeyCode::Enter, false) => Some(Action::Input(InputEvent::Enter)),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(mut source: Box<dyn WordSource>) -> Self {
        let game = GameState::new(source.as_mut());
        Self {
            game,
            source,
            messages: vec![Message {
                text: "Guess the five-letter word. Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewGame => self.new_game(),
            Action::Input(event) => self.handle_input(event),
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        let transition = self.game.handle(event);
        debug!(?event, ?transition, "input applied");

        match transition {
            Transition::Ignored if event == InputEvent::Enter => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Transition::Won(_) | Transition::Lost(_) => self.announce_end(),
            _ => {}
        }
    }

    /// Surface the end-of-game signal
    fn announce_end(&mut self) {
        let style = match self.game.outcome() {
            Some(Outcome::Won) => MessageStyle::Success,
            _ => MessageStyle::Error,
        };
        if let Some(text) = outcome_message(&self.game) {
            self.add_message(&text, style);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.restart(self.source.as_mut());
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = key_to_action(key, app.game.is_ended())
        {
            app.apply(action);
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
    use crate::core::{CellStatus, Word};
    use crate::wordlists::FixedWordSource;

    fn app(target: &str) -> App {
        App::new(Box::new(FixedWordSource(Word::new(target).unwrap())))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            if let Some(action) = key_to_action(press(KeyCode::Char(c)), app.game.is_ended()) {
                app.apply(action);
            }
        }
    }

    #[test]
    fn keys_map_to_game_input() {
        assert_eq!(
            key_to_action(press(KeyCode::Char('a')), false),
            Some(Action::Input(InputEvent::Letter('A')))
        );
        assert_eq!(
            key_to_action(press(KeyCode::Backspace), false),
            Some(Action::Input(InputEvent::Delete))
        );
        assert_eq!(
            key_to_action(press(KeyCode::Enter), false),
            Some(Action::Input(InputEvent::Enter))
        );
        assert_eq!(key_to_action(press(KeyCode::Char('1')), false), None);
        assert_eq!(key_to_action(press(KeyCode::Esc), false), Some(Action::Quit));
    }

    #[test]
    fn letters_are_game_input_until_game_over() {
        assert_eq!(
            key_to_action(press(KeyCode::Char('q')), false),
            Some(Action::Input(InputEvent::Letter('Q')))
        );
        assert_eq!(key_to_action(press(KeyCode::Char('q')), true), Some(Action::Quit));
        assert_eq!(key_to_action(press(KeyCode::Char('n')), true), Some(Action::NewGame));
        assert_eq!(key_to_action(press(KeyCode::Enter), true), Some(Action::NewGame));
        assert_eq!(key_to_action(press(KeyCode::Char('a')), true), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(key, false), Some(Action::Quit));
    }

    #[test]
    fn short_submit_shows_error() {
        let mut app = app("apple");
        type_keys(&mut app, "app");
        app.apply(Action::Input(InputEvent::Enter));
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.game.cursor(), (0, 3));
    }

    #[test]
    fn winning_announces_and_new_game_resets() {
        let mut app = app("apple");
        type_keys(&mut app, "apple");
        app.apply(Action::Input(InputEvent::Enter));
        assert!(app.game.is_ended());
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));

        app.apply(Action::NewGame);
        assert!(!app.game.is_ended());
        assert_eq!(app.game.cursor(), (0, 0));
        assert_eq!(app.game.key_statuses().letter('A'), CellStatus::Default);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("apple");
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
