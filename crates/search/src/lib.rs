//! Fuzzy text matching for the tour catalog.
//!
//! This crate provides:
//! - Text normalization for comparisons
//! - Levenshtein edit distance
//! - Tiered match scoring of a query token against a field
//! - Multi-token ranking of records

mod fuzzy;
mod normalize;
mod rank;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use fuzzy::{levenshtein_distance, min_word_distance};
pub use normalize::{normalize, normalize_opt};
pub use rank::{query_tokens, rank, score_fields, score_record, Searchable};
pub use relevance::{classify, match_score, MatchScore};

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Summed match score (higher is better)
    pub score: u32,
}
