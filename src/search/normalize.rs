//! Text normalization shared by queries and indexed text
//!
//! Both sides go through [`normalize`], so "Wi-Fi", "wifi" and " WI FI " all
//! compare equal.

/// Lowercase `text` and drop everything that is not a letter or a digit
///
/// # Examples
/// ```
/// # use trellis::search::normalize;
/// assert_eq!(normalize("  Wi-Fi "), "wifi");
/// assert_eq!(normalize("Déjà Vu 2"), "déjàvu2");
/// assert_eq!(normalize("--"), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A normalized, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    /// Parse user input
    ///
    /// Returns `None` when nothing searchable remains after normalization; the
    /// caller should show the unfiltered hierarchy in that case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }
        Some(Self {
            raw: input.trim().to_string(),
            normalized,
        })
    }

    /// The text as typed, trimmed
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
