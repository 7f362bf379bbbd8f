//! Views: the seam between settings content and the terminal renderer
//!
//! A [`View`] renders to ratatui [`Line`]s and may react to activation (Enter)
//! and adjustment (Left/Right). Views are cheap, short-lived values: they are
//! produced on demand by [`ViewFactory`] closures and thrown away after each
//! frame. Anything that must survive a frame lives in a
//! [`State`](crate::state::State) handle captured by the factory.

mod controls;

pub use controls::{Button, Header, Label, Link, Picker, Stack, Stepper, Text, Toggle};

use crate::node::NodeId;
use ratatui::text::Line;
use std::rc::Rc;

/// Outcome of interacting with a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The view does not respond to this interaction
    Ignored,
    /// The view changed some state
    Updated,
    /// The view asks to open the scope of the given node
    Open(NodeId),
}

/// A renderable, possibly interactive row of content
pub trait View {
    /// Render the view as one or more lines
    fn render(&self) -> Vec<Line<'static>>;

    /// Whether the view can take the cursor
    fn is_interactive(&self) -> bool {
        false
    }

    /// Primary action (Enter)
    fn activate(&mut self) -> Activation {
        Activation::Ignored
    }

    /// Step the value by `delta` (Left is -1, Right is +1)
    fn adjust(&mut self, _delta: i64) -> Activation {
        Activation::Ignored
    }

    /// Hand over child views if this is a composite
    ///
    /// Composites return their children once; leaves return `None`.
    fn take_children(&mut self) -> Option<Vec<Box<dyn View>>> {
        None
    }

    /// Rendered text without styling, lines joined by newlines
    fn plain_text(&self) -> String {
        self.render()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Zero-argument producer of fresh view instances
///
/// Factories capture [`State`](crate::state::State) handles, which are bound to
/// the thread that created them, so factories are single-threaded too.
pub type ViewFactory = Rc<dyn Fn() -> Box<dyn View>>;

/// Zero-argument producer of a custom icon glyph
pub type IconFactory = Rc<dyn Fn() -> String>;

/// Wrap a closure as a [`ViewFactory`]
pub fn factory<V, F>(f: F) -> ViewFactory
where
    V: View + 'static,
    F: Fn() -> V + 'static,
{
    Rc::new(move || Box::new(f()) as Box<dyn View>)
}

/// Wrap a closure as an [`IconFactory`]
pub fn icon_factory<F>(f: F) -> IconFactory
where
    F: Fn() -> String + 'static,
{
    Rc::new(f)
}

/// Flatten composites into one view per leaf, preserving order
#[must_use]
pub fn expand(mut view: Box<dyn View>) -> Vec<Box<dyn View>> {
    match view.take_children() {
        Some(children) => children.into_iter().flat_map(expand).collect(),
        None => vec![view],
    }
}

/// Flatten a list of views
#[must_use]
pub fn expand_all(views: Vec<Box<dyn View>>) -> Vec<Box<dyn View>> {
    views.into_iter().flat_map(expand).collect()
}
