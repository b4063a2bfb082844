//! Relevance scoring for a query token against one text field.

use crate::fuzzy::min_word_distance;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Relevance score levels.
///
/// Checks run from `Exact` downwards and the first one that holds wins.
/// `Contains` is checked before `Prefix` and `WordPrefix`, and both of those
/// imply `Contains`, so in practice they are never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScore {
    /// No match
    None = 0,
    /// Some word is exactly two edits away
    Typo2 = 20,
    /// Some word is at most one edit away
    Typo1 = 30,
    /// Some word starts with the query
    WordPrefix = 40,
    /// Text starts with the query
    Prefix = 50,
    /// Text contains the query
    Contains = 60,
    /// Text equals the query
    Exact = 100,
}

impl MatchScore {
    /// Numeric value used when summing scores.
    #[inline]
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Map a numeric score back to its level.
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            20 => Some(Self::Typo2),
            30 => Some(Self::Typo1),
            40 => Some(Self::WordPrefix),
            50 => Some(Self::Prefix),
            60 => Some(Self::Contains),
            100 => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Classify how well `query` matches `text`.
///
/// Both inputs are raw; they are normalized here.
pub fn classify(query: &str, text: &str) -> MatchScore {
    let query = normalize(query);
    let text = normalize(text);

    if query.is_empty() || text.is_empty() {
        return MatchScore::None;
    }

    if text == query {
        return MatchScore::Exact;
    }

    if text.contains(query.as_str()) {
        return MatchScore::Contains;
    }

    // Unreachable while `Contains` runs first; kept for ranking parity.
    if text.starts_with(query.as_str()) {
        return MatchScore::Prefix;
    }

    // Same as above: a word prefix is also a substring.
    if text.split_whitespace().any(|word| word.starts_with(query.as_str())) {
        return MatchScore::WordPrefix;
    }

    match min_word_distance(&query, &text) {
        Some(d) if d <= 1 => MatchScore::Typo1,
        Some(2) => MatchScore::Typo2,
        _ => MatchScore::None,
    }
}

/// Calculate the match score of a query token against a text field.
///
/// # Arguments
/// * `query` - The query token
/// * `text` - The field to score
///
/// # Returns
/// One of 0, 20, 30, 40, 50, 60 or 100 (higher is better)
pub fn match_score(query: &str, text: &str) -> u32 {
    classify(query, text).value()
}
