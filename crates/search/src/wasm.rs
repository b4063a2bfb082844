//! WASM bindings for the matcher.

use wasm_bindgen::prelude::*;

/// Score a query token against a text field.
///
/// # Returns
/// One of 0, 20, 30, 40, 50, 60 or 100 (higher is better)
#[wasm_bindgen]
pub fn match_score(query: &str, text: &str) -> u32 {
    crate::match_score(query, text)
}

/// Normalize text for comparison.
#[wasm_bindgen]
pub fn normalize_text(text: &str) -> String {
    crate::normalize(text)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Rank items and return sorted results as JSON.
///
/// # Arguments
/// * `query` - Raw search query
/// * `items_json` - JSON array of items with `id` and `fields` (array of strings)
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `id` and `score` fields, sorted by score
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, max_results: usize) -> String {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Item {
        id: serde_json::Value,
        fields: Vec<String>,
    }

    impl crate::Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            self.fields.iter().map(String::as_str).collect()
        }
    }

    #[derive(Serialize)]
    struct Hit<'a> {
        id: &'a serde_json::Value,
        score: u32,
    }

    let items: Vec<Item> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let mut results: Vec<Hit<'_>> = crate::rank(query, &items)
        .into_iter()
        .map(|crate::SearchResult { item, score }| Hit { id: &item.id, score })
        .collect();

    if max_results > 0 {
        results.truncate(max_results);
    }

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
