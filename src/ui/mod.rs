//! Terminal UI for settings screens
//!
//! A ratatui + crossterm front end over a
//! [`SettingsScreen`](crate::render::SettingsScreen):
//!
//! ```text
//! ┌ Search ───────────────────────────┐
//! │ Search: wi│                       │
//! └───────────────────────────────────┘
//! ┌ Results (1) ──────────────────────┐
//! │> CONNECTIONS ›                    │
//! │  Wi-Fi  [on]                      │
//! └───────────────────────────────────┘
//! ↑↓:move  Enter:select  ←→:adjust  ESC:clear
//! ```
//!
//! Key handling lives in [`events`] and only touches [`AppState`], so it is
//! tested without a terminal.

mod app;
mod error;
pub mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::SettingsApp;
pub use error::{Result, UiError};
pub use events::EventResult;
pub use state::{AppState, UiOptions};
pub use theme::Theme;
