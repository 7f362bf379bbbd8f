//! Event handling for the settings TUI
//!
//! Maps keyboard events to state changes. Nothing here touches the terminal
//! except [`poll_and_handle`], so key handling is tested without one.

use super::error::Result;
use super::state::AppState;
use crate::view::Activation;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query changed and results were recomputed
    QueryChanged,
    /// A scope was opened or closed
    Navigated,
    /// A control changed a value
    Updated,
    /// Leave the event loop
    Quit,
    /// No action taken
    Ignored,
}

impl From<Activation> for EventResult {
    fn from(activation: Activation) -> Self {
        match activation {
            Activation::Ignored => Self::Ignored,
            Activation::Updated => Self::Updated,
            Activation::Open(_) => Self::Navigated,
        }
    }
}

/// Apply one key press to `state`
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,

        // Esc unwinds one level: query, then scope, then the app
        (KeyCode::Esc, _) => {
            if !state.screen.query().is_empty() {
                state.set_query("");
                EventResult::QueryChanged
            } else if state.back() {
                EventResult::Navigated
            } else {
                EventResult::Quit
            }
        }

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            if state.cursor_up() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            if state.cursor_down() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }

        (KeyCode::Enter, _) => state.activate().into(),
        (KeyCode::Left, _) => state.adjust(-1).into(),
        (KeyCode::Right, _) => state.adjust(1).into(),

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.query_backspace() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }

        _ => EventResult::Ignored,
    }
}

/// Wait up to `timeout` for an event and handle it
///
/// # Errors
///
/// Returns `UiError::Io` if reading terminal events fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    match event::read()? {
        Event::Key(key) => Ok(handle_key(state, key)),
        Event::Resize(_, _) => Ok(EventResult::Continue),
        _ => Ok(EventResult::Ignored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ViewRegistry;
    use crate::render::{Phase, SettingsScreen};
    use crate::testing;
    use crate::ui::state::UiOptions;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> (AppState, testing::SettingsFixture) {
        let fixture = testing::settings_fixture();
        let screen =
            SettingsScreen::new("Settings", fixture.content.clone(), ViewRegistry::shared());
        (AppState::new(screen, UiOptions::default()), fixture)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_key(state, key(KeyCode::Char(c))), EventResult::QueryChanged);
        }
    }

    #[test]
    fn test_typing_searches() {
        let (mut state, _fixture) = state();
        type_text(&mut state, "theme");

        assert_eq!(state.screen.phase(), Phase::Searching);
        assert_eq!(state.rows[1].plain_text(), "Dark Mode  [off]");
        // The Display header is interactive, so the cursor starts there
        assert_eq!(state.cursor, Some(0));
    }

    #[test]
    fn test_enter_toggles_search_result() {
        let (mut state, fixture) = state();
        type_text(&mut state, "theme");

        assert_eq!(handle_key(&mut state, key(KeyCode::Down)), EventResult::Continue);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Updated);
        assert!(fixture.dark_mode.get());
        assert_eq!(state.rows[1].plain_text(), "Dark Mode  [on]");
    }

    #[test]
    fn test_left_right_adjust() {
        let (mut state, fixture) = state();
        type_text(&mut state, "brightness");
        handle_key(&mut state, key(KeyCode::Down));

        assert_eq!(handle_key(&mut state, key(KeyCode::Right)), EventResult::Updated);
        assert_eq!(fixture.brightness.get(), 80);
        assert_eq!(handle_key(&mut state, key(KeyCode::Left)), EventResult::Updated);
        assert_eq!(fixture.brightness.get(), 70);
    }

    #[test]
    fn test_escape_unwinds_query_then_scope_then_quits() {
        let (mut state, _fixture) = state();
        type_text(&mut state, "theme");

        // Header row opens Display and leaves search
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Navigated);
        assert_eq!(state.screen.scope_title(), "Display");

        type_text(&mut state, "x");
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::QueryChanged);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Navigated);
        assert_eq!(state.screen.scope_title(), "Settings");
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Quit);
    }

    #[test]
    fn test_backspace() {
        let (mut state, _fixture) = state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Backspace)), EventResult::Ignored);
        type_text(&mut state, "w");
        assert_eq!(handle_key(&mut state, key(KeyCode::Backspace)), EventResult::QueryChanged);
        assert_eq!(state.screen.phase(), Phase::Browsing);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut state, _fixture) = state();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, event), EventResult::Quit);
    }

    #[test]
    fn test_enter_on_link_navigates() {
        let (mut state, _fixture) = state();
        while state.cursor_down() {}

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Navigated);
        assert_eq!(state.screen.scope_title(), "Credits");
        assert_eq!(state.cursor, None);
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (mut state, _fixture) = state();
        let mut event = key(KeyCode::Char('w'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut state, event), EventResult::Ignored);
        assert_eq!(state.screen.query(), "");
    }
}
