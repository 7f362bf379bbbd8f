//! UI error types

use thiserror::Error;

/// Errors that can occur while running the settings TUI
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
