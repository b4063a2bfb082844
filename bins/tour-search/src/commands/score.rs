//! Score and distance commands - inspect the matcher directly

use anyhow::Result;
use owo_colors::OwoColorize;
use tour_cli::score_badge;
use tour_core::error::exit_codes;
use tour_search::{classify, levenshtein_distance, normalize};

/// Run the score command
pub fn run_score(query: &str, text: &str, format: &str) -> Result<i32> {
    let tier = classify(query, text);

    if format == "json" {
        let output = serde_json::json!({
            "query": query,
            "text": text,
            "normalized_query": normalize(query),
            "normalized_text": normalize(text),
            "score": tier.value(),
            "tier": tier,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", score_badge(tier.value()), format!("({:?})", tier).dimmed());
    }

    Ok(exit_codes::SUCCESS)
}

/// Run the distance command
pub fn run_distance(a: &str, b: &str, format: &str) -> Result<i32> {
    let distance = levenshtein_distance(a, b);

    if format == "json" {
        let output = serde_json::json!({ "a": a, "b": b, "distance": distance });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", distance);
    }

    Ok(exit_codes::SUCCESS)
}
