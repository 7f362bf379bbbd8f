//! Manifest error types
//!
//! Raised while reading a manifest file or turning it into content. Parsing
//! errors carry the TOML parser's own message, which already points at the
//! offending line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or instantiating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the expected shape
    #[error("Invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two controls share a key
    #[error("Duplicate setting key: {0}")]
    DuplicateKey(String),

    /// A stepper's range or step is unusable
    #[error("Invalid range for '{key}': min {min}, max {max}, step {step}")]
    InvalidRange {
        key: String,
        min: i64,
        max: i64,
        step: i64,
    },

    /// A picker without options
    #[error("Picker '{0}' has no options")]
    EmptyOptions(String),

    /// A default value outside what the control accepts
    #[error("Default for '{key}' is out of range: {value}")]
    DefaultOutOfRange { key: String, value: String },
}

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
