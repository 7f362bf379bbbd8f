//! Free-text search over the node tree
//!
//! Queries and indexed text go through the same [`normalize`] step. Each node
//! gets the best score over its title and tags (see [`score`]), and the
//! [`SearchEngine`] files hits under their nearest ancestor group.

pub mod engine;
pub mod normalize;
pub mod score;

pub use engine::{
    Ancestor, HitKind, ResultBucket, ResultOrder, SearchEngine, SearchHit, SearchOptions,
    SearchResults, search,
};
pub use normalize::{Query, normalize};
pub use score::{Match, MatchField, MatchKind, ScoreWeights, WeightsError};
