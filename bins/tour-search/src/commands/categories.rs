//! Categories command - filter options with tour counts

use super::App;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tour_catalog::CategoryFilter;
use tour_cli::Status;
use tour_core::error::exit_codes;

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: String,
    label: &'static str,
    tours: usize,
}

/// Run the categories command
pub fn run(app: &App, format: &str) -> Result<i32> {
    let counts: Vec<CategoryCount> = CategoryFilter::options()
        .into_iter()
        .map(|filter| CategoryCount {
            category: filter.to_string(),
            label: filter.label(),
            tours: app.catalog.filter(&filter).len(),
        })
        .collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(exit_codes::SUCCESS);
    }

    Status::header("Categories");
    for entry in &counts {
        println!(
            "  {:<10} {:<10} {}",
            entry.category,
            entry.label.dimmed(),
            entry.tours
        );
    }

    Ok(exit_codes::SUCCESS)
}
