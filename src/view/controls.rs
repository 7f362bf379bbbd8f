//! Built-in views
//!
//! Bound controls ([`Toggle`], [`Stepper`], [`Picker`]) read their [`State`] at
//! render time and write through it, so two views built from the same handle
//! never disagree.

use super::{Activation, View};
use crate::node::NodeId;
use crate::state::State;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::rc::Rc;

fn title_spans(icon: Option<&str>, title: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(3);
    if let Some(icon) = icon {
        spans.push(Span::raw(icon.to_string()));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(title.to_string()));
    spans
}

fn value_span(value: String) -> Span<'static> {
    Span::styled(value, Style::default().fg(Color::Cyan))
}

/// Static text, never focusable
#[derive(Debug, Clone)]
pub struct Text {
    text: String,
    dimmed: bool,
}

impl Text {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dimmed: false,
        }
    }

    /// Render in a secondary color
    #[must_use]
    pub const fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }
}

impl View for Text {
    fn render(&self) -> Vec<Line<'static>> {
        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        self.text
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect()
    }
}

/// Static title and icon
///
/// Used where live content cannot be resolved.
#[derive(Debug, Clone)]
pub struct Label {
    title: String,
    icon: Option<String>,
}

impl Label {
    #[must_use]
    pub fn new(title: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }
}

impl View for Label {
    fn render(&self) -> Vec<Line<'static>> {
        vec![Line::from(title_spans(self.icon.as_deref(), &self.title))]
    }
}

/// Section header, optionally opening a scope when activated
#[derive(Debug, Clone)]
pub struct Header {
    title: String,
    target: Option<NodeId>,
}

impl Header {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: None,
        }
    }

    #[must_use]
    pub const fn target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }
}

impl View for Header {
    fn render(&self) -> Vec<Line<'static>> {
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(self.title.to_uppercase(), style)];
        if self.target.is_some() {
            spans.push(Span::styled(" ›", Style::default().fg(Color::DarkGray)));
        }
        vec![Line::from(spans)]
    }

    fn is_interactive(&self) -> bool {
        self.target.is_some()
    }

    fn activate(&mut self) -> Activation {
        self.target.map_or(Activation::Ignored, Activation::Open)
    }
}

/// Navigation row: icon, title and a disclosure marker
#[derive(Debug, Clone)]
pub struct Link {
    target: NodeId,
    title: String,
    icon: Option<String>,
}

impl Link {
    #[must_use]
    pub fn new(target: NodeId, title: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            target,
            title: title.into(),
            icon,
        }
    }

    #[must_use]
    pub const fn target(&self) -> NodeId {
        self.target
    }
}

impl View for Link {
    fn render(&self) -> Vec<Line<'static>> {
        let mut spans = title_spans(self.icon.as_deref(), &self.title);
        spans.push(Span::styled(" ›", Style::default().fg(Color::DarkGray)));
        vec![Line::from(spans)]
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn activate(&mut self) -> Activation {
        Activation::Open(self.target)
    }
}

/// On/off switch bound to a `State<bool>`
#[derive(Debug, Clone)]
pub struct Toggle {
    title: String,
    state: State<bool>,
}

impl Toggle {
    #[must_use]
    pub fn new(title: impl Into<String>, state: State<bool>) -> Self {
        Self {
            title: title.into(),
            state,
        }
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.get()
    }
}

impl View for Toggle {
    fn render(&self) -> Vec<Line<'static>> {
        let (marker, color) = if self.is_on() {
            ("[on]", Color::Green)
        } else {
            ("[off]", Color::DarkGray)
        };
        let mut spans = title_spans(None, &self.title);
        spans.push(Span::raw("  "));
        spans.push(Span::styled(marker, Style::default().fg(color)));
        vec![Line::from(spans)]
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn activate(&mut self) -> Activation {
        self.state.update(|on| *on = !*on);
        Activation::Updated
    }

    fn adjust(&mut self, delta: i64) -> Activation {
        if delta == 0 {
            return Activation::Ignored;
        }
        let wanted = delta > 0;
        if self.is_on() == wanted {
            return Activation::Ignored;
        }
        self.state.set(wanted);
        Activation::Updated
    }
}

/// Integer value within `[min, max]`, bound to a `State<i64>`
#[derive(Debug, Clone)]
pub struct Stepper {
    title: String,
    state: State<i64>,
    min: i64,
    max: i64,
    step: i64,
}

impl Stepper {
    /// Create a stepper; `step` is clamped to at least 1 and the range is reordered if inverted
    #[must_use]
    pub fn new(title: impl Into<String>, state: State<i64>, min: i64, max: i64, step: i64) -> Self {
        Self {
            title: title.into(),
            state,
            min: min.min(max),
            max: max.max(min),
            step: step.max(1),
        }
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.state.get()
    }
}

impl View for Stepper {
    fn render(&self) -> Vec<Line<'static>> {
        let mut spans = title_spans(None, &self.title);
        spans.push(Span::raw("  "));
        spans.push(value_span(format!("‹ {} ›", self.value())));
        vec![Line::from(spans)]
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn activate(&mut self) -> Activation {
        let next = self.value().saturating_add(self.step);
        let next = if next > self.max { self.min } else { next };
        self.state.set(next);
        Activation::Updated
    }

    fn adjust(&mut self, delta: i64) -> Activation {
        let current = self.value();
        let next = current
            .saturating_add(delta.saturating_mul(self.step))
            .clamp(self.min, self.max);
        if next == current {
            return Activation::Ignored;
        }
        self.state.set(next);
        Activation::Updated
    }
}

/// One-of-many choice, bound to the selected index
#[derive(Debug, Clone)]
pub struct Picker {
    title: String,
    options: Rc<[String]>,
    state: State<usize>,
}

impl Picker {
    #[must_use]
    pub fn new(title: impl Into<String>, options: Rc<[String]>, state: State<usize>) -> Self {
        Self {
            title: title.into(),
            options,
            state,
        }
    }

    /// Currently selected option, if the index is in range
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.state.get()).map(String::as_str)
    }
}

impl View for Picker {
    fn render(&self) -> Vec<Line<'static>> {
        let mut spans = title_spans(None, &self.title);
        spans.push(Span::raw("  "));
        spans.push(value_span(self.selected().unwrap_or("-").to_string()));
        vec![Line::from(spans)]
    }

    fn is_interactive(&self) -> bool {
        !self.options.is_empty()
    }

    fn activate(&mut self) -> Activation {
        self.adjust(1)
    }

    fn adjust(&mut self, delta: i64) -> Activation {
        let len = self.options.len();
        if len == 0 || delta == 0 {
            return Activation::Ignored;
        }
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let current = i64::try_from(self.state.get()).unwrap_or(0).rem_euclid(len);
        let next = (current + delta.rem_euclid(len)) % len;
        self.state.set(usize::try_from(next).unwrap_or(0));
        Activation::Updated
    }
}

/// Runs an action when activated
#[derive(Clone)]
pub struct Button {
    title: String,
    action: Rc<dyn Fn()>,
}

impl Button {
    #[must_use]
    pub fn new(title: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            action: Rc::new(action),
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button").field("title", &self.title).finish_non_exhaustive()
    }
}

impl View for Button {
    fn render(&self) -> Vec<Line<'static>> {
        vec![Line::from(Span::styled(
            self.title.clone(),
            Style::default().fg(Color::Blue),
        ))]
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn activate(&mut self) -> Activation {
        (self.action)();
        Activation::Updated
    }
}

/// Vertical composite of views
#[derive(Default)]
pub struct Stack {
    children: Vec<Box<dyn View>>,
}

impl Stack {
    #[must_use]
    pub fn new(children: Vec<Box<dyn View>>) -> Self {
        Self { children }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl View for Stack {
    fn render(&self) -> Vec<Line<'static>> {
        self.children.iter().flat_map(|child| child.render()).collect()
    }

    fn is_interactive(&self) -> bool {
        self.children.iter().any(|child| child.is_interactive())
    }

    fn take_children(&mut self) -> Option<Vec<Box<dyn View>>> {
        Some(std::mem::take(&mut self.children))
    }
}
