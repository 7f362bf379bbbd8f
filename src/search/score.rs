//! Match scoring
//!
//! A node is scored against the normalized query once per field (its title,
//! then each tag). The node's score is the best field score, never a sum.
//! Title matches always outrank tag matches, and within a field an exact match
//! outranks a prefix match, which outranks a substring match.

use super::normalize::normalize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a field matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    Contains,
}

/// Which field matched
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "field", content = "value")]
pub enum MatchField {
    Title,
    /// A tag, as declared
    Tag(String),
}

/// Best match of a node against a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub kind: MatchKind,
    pub field: MatchField,
    pub score: u32,
}

impl Match {
    #[must_use]
    pub const fn is_title(&self) -> bool {
        matches!(self.field, MatchField::Title)
    }
}

/// Weights violate the required ordering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid score weights: {0}")]
pub struct WeightsError(String);

/// Score contributed by each kind of match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub title_exact: u32,
    pub title_prefix: u32,
    pub title_contains: u32,
    pub tag_exact: u32,
    pub tag_prefix: u32,
    pub tag_contains: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_exact: 1000,
            title_prefix: 500,
            title_contains: 300,
            tag_exact: 150,
            tag_prefix: 120,
            tag_contains: 100,
        }
    }
}

impl ScoreWeights {
    /// Check the ordering exact > prefix > contains > any tag match > 0
    ///
    /// # Errors
    ///
    /// Returns `WeightsError` naming the first violated relation.
    pub fn validate(&self) -> Result<(), WeightsError> {
        let checks = [
            (self.title_exact > self.title_prefix, "title_exact must exceed title_prefix"),
            (self.title_prefix > self.title_contains, "title_prefix must exceed title_contains"),
            (self.title_contains > self.tag_exact, "title_contains must exceed tag_exact"),
            (self.tag_exact >= self.tag_prefix, "tag_exact must be at least tag_prefix"),
            (self.tag_prefix >= self.tag_contains, "tag_prefix must be at least tag_contains"),
            (self.tag_contains > 0, "tag_contains must be positive"),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err(WeightsError((*message).to_string())),
            None => Ok(()),
        }
    }

    const fn weight(&self, kind: MatchKind, title: bool) -> u32 {
        match (kind, title) {
            (MatchKind::Exact, true) => self.title_exact,
            (MatchKind::Prefix, true) => self.title_prefix,
            (MatchKind::Contains, true) => self.title_contains,
            (MatchKind::Exact, false) => self.tag_exact,
            (MatchKind::Prefix, false) => self.tag_prefix,
            (MatchKind::Contains, false) => self.tag_contains,
        }
    }
}

/// Classify how normalized `text` matches the normalized `query`
#[must_use]
pub fn match_kind(text: &str, query: &str) -> Option<MatchKind> {
    if query.is_empty() || text.is_empty() {
        None
    } else if text == query {
        Some(MatchKind::Exact)
    } else if text.starts_with(query) {
        Some(MatchKind::Prefix)
    } else if text.contains(query) {
        Some(MatchKind::Contains)
    } else {
        None
    }
}

/// Score a title and its tags against a normalized query
///
/// Returns the best match, preferring the title when scores tie.
#[must_use]
pub fn score_fields(
    title: &str,
    tags: &[String],
    query: &str,
    weights: &ScoreWeights,
) -> Option<Match> {
    let mut best = match_kind(&normalize(title), query).map(|kind| Match {
        kind,
        field: MatchField::Title,
        score: weights.weight(kind, true),
    });

    for tag in tags {
        let Some(kind) = match_kind(&normalize(tag), query) else {
            continue;
        };
        let score = weights.weight(kind, false);
        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(Match {
                kind,
                field: MatchField::Tag(tag.clone()),
                score,
            });
        }
    }

    best
}
