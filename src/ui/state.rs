//! State of the settings TUI between frames
//!
//! Rows are rebuilt from the screen whenever the query, scope or a value
//! changes. The cursor only ever rests on interactive rows.

use crate::render::{Phase, SettingsScreen};
use crate::view::{Activation, View};

/// Presentation options for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    /// Text shown before the query
    pub prompt: String,
    /// Show hit count and best score above search results
    pub show_scores: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            prompt: "Search:".to_string(),
            show_scores: false,
        }
    }
}

/// Main application state
pub struct AppState {
    pub screen: SettingsScreen,
    pub options: UiOptions,
    /// Rows for the current phase and scope
    pub rows: Vec<Box<dyn View>>,
    /// Index into `rows`, always an interactive row
    pub cursor: Option<usize>,
}

impl AppState {
    #[must_use]
    pub fn new(screen: SettingsScreen, options: UiOptions) -> Self {
        let mut state = Self {
            screen,
            options,
            rows: Vec::new(),
            cursor: None,
        };
        state.reload();
        state
    }

    /// Rebuild rows and put the cursor on the first interactive row
    pub fn reload(&mut self) {
        self.rows = self.screen.rows();
        self.cursor = self.rows.iter().position(|row| row.is_interactive());
    }

    /// Rebuild rows keeping the cursor where it was, if still valid
    pub fn refresh(&mut self) {
        let previous = self.cursor;
        self.rows = self.screen.rows();
        self.cursor = previous
            .filter(|&index| self.rows.get(index).is_some_and(|row| row.is_interactive()))
            .or_else(|| self.rows.iter().position(|row| row.is_interactive()));
    }

    pub fn cursor_up(&mut self) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        match (0..current).rev().find(|&index| self.rows[index].is_interactive()) {
            Some(index) => {
                self.cursor = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn cursor_down(&mut self) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        match (current + 1..self.rows.len()).find(|&index| self.rows[index].is_interactive()) {
            Some(index) => {
                self.cursor = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn query_push(&mut self, c: char) {
        let mut query = self.screen.query().to_string();
        query.push(c);
        self.set_query(&query);
    }

    /// Remove the last character; `false` if the query was already empty
    pub fn query_backspace(&mut self) -> bool {
        let mut query = self.screen.query().to_string();
        if query.pop().is_none() {
            return false;
        }
        self.set_query(&query);
        true
    }

    pub fn set_query(&mut self, query: &str) {
        self.screen.set_query(query);
        self.reload();
    }

    /// Activate the row under the cursor
    pub fn activate(&mut self) -> Activation {
        let Some(index) = self.cursor else {
            return Activation::Ignored;
        };
        let activation = self.screen.activate(self.rows[index].as_mut());
        self.after(activation);
        activation
    }

    /// Adjust the row under the cursor
    pub fn adjust(&mut self, delta: i64) -> Activation {
        let Some(index) = self.cursor else {
            return Activation::Ignored;
        };
        let activation = self.screen.adjust(self.rows[index].as_mut(), delta);
        self.after(activation);
        activation
    }

    fn after(&mut self, activation: Activation) {
        match activation {
            Activation::Open(_) => self.reload(),
            Activation::Updated => self.refresh(),
            Activation::Ignored => {}
        }
    }

    /// Close the innermost scope
    pub fn back(&mut self) -> bool {
        let closed = self.screen.back();
        if closed {
            self.reload();
        }
        closed
    }

    /// Title shown above the rows
    #[must_use]
    pub fn list_title(&self) -> String {
        match (self.screen.phase(), self.screen.results()) {
            (Phase::Searching, Some(results)) if self.options.show_scores => {
                let best = results.iter_hits().map(|hit| hit.score()).max().unwrap_or(0);
                format!(" Results ({}, best score {best}) ", results.len())
            }
            (Phase::Searching, Some(results)) => format!(" Results ({}) ", results.len()),
            (Phase::EmptyResults, _) => " Results (0) ".to_string(),
            _ => format!(" {} ", self.screen.breadcrumbs().join(" › ")),
        }
    }
}
