//! Manifest file format
//!
//! ```toml
//! title = "Settings"
//!
//! [[content]]
//! kind = "group"
//! title = "Connections"
//! inline = true
//!
//! [[content.content]]
//! kind = "toggle"
//! key = "wifi"
//! title = "Wi-Fi"
//! tags = ["wireless", "network"]
//! default = true
//! ```

use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Settings".to_string()
}

const fn default_max() -> i64 {
    100
}

const fn default_step() -> i64 {
    1
}

/// A whole settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub content: Vec<Entry>,
}

/// How a control or text takes part in search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// A searchable item keyed by the setting key
    #[default]
    Item,
    /// An indexed view keyed by its title or first tag
    Indexed,
    /// Shown while browsing, never found by search
    Hidden,
}

/// One declaration in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Group(GroupEntry),
    /// A custom group showing lines of text behind a custom icon
    Page(PageEntry),
    Toggle(ToggleEntry),
    Stepper(StepperEntry),
    Picker(PickerEntry),
    Text(TextEntry),
}

impl Entry {
    /// Setting key, for controls
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Toggle(entry) => Some(&entry.key),
            Self::Stepper(entry) => Some(&entry.key),
            Self::Picker(entry) => Some(&entry.key),
            Self::Group(_) | Self::Page(_) | Self::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub title: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Render as a section in place instead of a navigation row
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub content: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub title: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleEntry {
    pub key: String,
    pub title: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub search: SearchMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepperEntry {
    pub key: String,
    pub title: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Starting value, `min` when absent
    pub default: Option<i64>,
    #[serde(default)]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_step")]
    pub step: i64,
    #[serde(default)]
    pub search: SearchMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerEntry {
    pub key: String,
    pub title: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub options: Vec<String>,
    /// Initially selected option, the first one when absent
    pub default: Option<String>,
    #[serde(default)]
    pub search: SearchMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub text: String,
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dimmed: bool,
    /// Hidden unless set
    pub search: Option<SearchMode>,
}
