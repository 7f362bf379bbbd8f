//! Configuration module for trellis
//!
//! Manages search ranking and TUI presentation settings.
//! Configuration is stored in the user's config directory unless a path is
//! given explicitly.

use crate::search::{ResultOrder, ScoreWeights, SearchOptions};
use crate::ui::UiOptions;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Search ranking settings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Order of hits within one ancestor bucket
    #[serde(default)]
    pub order: ResultOrder,

    /// Score for each kind of match
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_prompt() -> String {
    UiOptions::default().prompt
}

/// TUI presentation settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Text shown before the query
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Show hit count and best score above results
    #[serde(default)]
    pub show_scores: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_scores: false,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TrellisConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl TrellisConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                ConfigError::Message("Could not determine config directory".to_string())
            })?;

        Ok(config_dir.join("trellis").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, created
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, created
    /// or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            tracing::debug!(path = %path.display(), "wrote default configuration");
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check that the score weights keep their required ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the violated ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    #[must_use]
    pub const fn search_options(&self) -> SearchOptions {
        SearchOptions {
            order: self.search.order,
            weights: self.search.weights,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            prompt: self.ui.prompt.clone(),
            show_scores: self.ui.show_scores,
        }
    }
}
