//! Help bar widget for displaying keybind hints

use crate::render::Phase;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "←→")
    pub key: String,
    /// Action description (e.g., "select", "adjust")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the given phase; `nested` when a scope is open
#[must_use]
pub fn hints_for(phase: Phase, nested: bool) -> Vec<KeyHint> {
    let escape = match (phase, nested) {
        (Phase::Searching | Phase::EmptyResults, _) => "clear",
        (Phase::Browsing, true) => "back",
        (Phase::Browsing, false) => "quit",
    };
    vec![
        KeyHint::new("↑↓", "move"),
        KeyHint::new("Enter", "select"),
        KeyHint::new("←→", "adjust"),
        KeyHint::new("ESC", escape),
        KeyHint::new("ctrl+c", "quit"),
    ]
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
