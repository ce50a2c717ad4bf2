//! TUI application state and logic

use crate::engine::{GameEngine, SubmitError};
use crate::output::Palette;
use crate::stats::Statistics;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub palette: Palette,
    pub messages: Vec<Message>,
    pub stats: Statistics,
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

impl App {
    #[must_use]
    pub fn new(engine: GameEngine, palette: Palette) -> Self {
        let stats = Statistics::new(engine.config().max_guesses);
        let mut app = Self {
            engine,
            palette,
            messages: Vec::new(),
            stats,
            should_quit: false,
        };
        app.add_message("Type a word and press Enter", MessageStyle::Info);
        app
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
            return Ok(());
        }

        if self.engine.state().game_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game()?,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.engine.current_guess_mut().push(c);
            }
            KeyCode::Backspace => {
                self.engine.current_guess_mut().pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
        Ok(())
    }

    pub fn submit(&mut self) {
        match self.engine.submit_current_guess() {
            Ok(_) => {}
            Err(SubmitError::Invalid(_)) => {
                let text = self.engine.state().invalid_message().to_string();
                self.add_message(&text, MessageStyle::Error);
                return;
            }
            Err(SubmitError::GameOver) => return,
        }

        let state = self.engine.state();
        if !state.game_over() {
            return;
        }
        self.stats.record(state);
        if state.user_won() {
            let text = self.engine.winning_message().unwrap_or("Solved").to_string();
            self.add_message(&format!("🎉 {text}!"), MessageStyle::Success);
        } else {
            let text = format!("The word was {}", state.answer());
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for a new game or 'q' to quit", MessageStyle::Info);
    }

    /// Start another game
    ///
    /// # Errors
    ///
    /// Returns an error if the word lists cannot produce an answer.
    pub fn new_game(&mut self) -> Result<()> {
        self.engine.new_game()?;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
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

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
