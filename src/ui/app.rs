//! Terminal front end for a [`SettingsScreen`]

use super::error::Result;
use super::events::{EventResult, handle_key, poll_and_handle};
use super::state::{AppState, UiOptions};
use super::theme::Theme;
use super::widgets::{HelpBar, RowList, SearchBar, hints_for};
use crate::render::SettingsScreen;
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Interactive settings screen in the terminal
pub struct SettingsApp {
    state: AppState,
    theme: Theme,
}

impl SettingsApp {
    #[must_use]
    pub fn new(screen: SettingsScreen, options: UiOptions) -> Self {
        Self {
            state: AppState::new(screen, options),
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one key press without touching the terminal
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        handle_key(&mut self.state, key)
    }

    /// Give the screen back, with whatever scope and query it ended in
    #[must_use]
    pub fn into_screen(self) -> SettingsScreen {
        self.state.screen
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::Io` if the terminal cannot be set up or drawn to.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal);

        // Always restore the terminal, even on error
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!("terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if poll_and_handle(&mut self.state, Duration::from_millis(50))? == EventResult::Quit {
                return Ok(());
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Rows
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let state = &self.state;
        frame.render_widget(
            SearchBar::new(state.screen.query(), &state.options.prompt, &self.theme),
            layout[0],
        );

        let title = state.list_title();
        let list = RowList::new(&state.rows, state.cursor, &title, &self.theme);
        frame.render_widget(list, layout[1]);

        let hints = hints_for(state.screen.phase(), state.screen.depth() > 0);
        frame.render_widget(HelpBar::new(&hints, &self.theme), layout[2]);
    }
}
