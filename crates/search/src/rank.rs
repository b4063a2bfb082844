//! Multi-token ranking over a list of records.
//!
//! A query is split into normalized tokens; each record's total score is the
//! sum of [`match_score`] over every (token, field) pair. Records that score 0
//! are dropped and the rest are ordered by descending score. The sort is
//! stable, so equal scores keep their input order.

use crate::normalize::normalize;
use crate::relevance::match_score;
use crate::SearchResult;

/// A record with text fields that a query can be matched against.
pub trait Searchable {
    /// Fields to score, in a fixed order.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for str {
    fn search_fields(&self) -> Vec<&str> {
        vec![self]
    }
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

/// Split a raw query into normalized, non-empty tokens.
pub fn query_tokens(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Sum of match scores over every (token, field) pair.
pub fn score_fields<S: AsRef<str>>(tokens: &[S], fields: &[&str]) -> u32 {
    tokens
        .iter()
        .map(|token| {
            fields
                .iter()
                .map(|field| match_score(token.as_ref(), field))
                .sum::<u32>()
        })
        .sum()
}

/// Total score of one record for already tokenized input.
pub fn score_record<T: Searchable + ?Sized, S: AsRef<str>>(tokens: &[S], record: &T) -> u32 {
    score_fields(tokens, &record.search_fields())
}

/// Rank `items` against `query`.
///
/// # Arguments
/// * `query` - Raw user query, may contain several words
/// * `items` - Records in their original order
///
/// # Returns
/// Matching records sorted by descending score. A query without tokens
/// matches everything: all items are returned in order with score 0.
///
/// # Example
/// ```
/// use tour_search::rank;
///
/// let names = ["Kuta Beach Tour", "Ubud Cultural Tour", "Nusa Penida Adventure"];
/// let hits = rank("tour", &names);
/// assert_eq!(hits.len(), 2);
/// assert_eq!(*hits[0].item, "Kuta Beach Tour");
/// ```
pub fn rank<'a, T>(query: &str, items: &'a [T]) -> Vec<SearchResult<&'a T>>
where
    T: Searchable + Sync,
{
    let tokens = query_tokens(query);

    if tokens.is_empty() {
        return items
            .iter()
            .map(|item| SearchResult { item, score: 0 })
            .collect();
    }

    let mut results: Vec<SearchResult<&'a T>> = score_all(&tokens, items)
        .into_iter()
        .filter(|r| r.score > 0)
        .collect();

    // `sort_by` is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

fn score_all<'a, T>(tokens: &[String], items: &'a [T]) -> Vec<SearchResult<&'a T>>
where
    T: Searchable + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| SearchResult { item, score: score_record(tokens, item) })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| SearchResult { item, score: score_record(tokens, item) })
            .collect()
    }
}
