//! Trellis - declarative settings screens with a searchable index
//!
//! Settings are declared once as [`content::Content`]. From that declaration
//! trellis derives a tree of [`node::Node`] metadata with stable identities,
//! searches it with [`search::SearchEngine`], and renders either the declared
//! hierarchy or grouped search results through [`render::SettingsScreen`].
//! Live views are never stored in the tree; they are reached through the
//! [`registry::ViewRegistry`] by node identity.
//!
//! Screens can also be described in TOML (see [`manifest`]) and browsed in a
//! terminal UI (see [`ui`]).

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod content;
pub mod manifest;
pub mod node;
pub mod output;
pub mod registry;
pub mod render;
pub mod search;
pub mod state;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TrellisError {
    /// Manifest could not be loaded or instantiated
    #[error("Manifest error: {0}")]
    ManifestError(#[from] manifest::ManifestError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Results could not be encoded as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Values could not be encoded as TOML
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::ser::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub use content::{Content, CustomGroup, Group, IndexedView, Item, RawView};
pub use node::{Node, NodeId};
pub use registry::ViewRegistry;
pub use render::SettingsScreen;
pub use state::State;
