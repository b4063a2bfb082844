//! Search and suggest commands

use super::App;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tour_catalog::{CategoryFilter, Page, PageLink, SearchResult, Tour};
use tour_cli::{format_count, score_badge, truncate, Status};
use tour_core::error::exit_codes;
use tour_telemetry::{metrics, Timer};

/// JSON output for one search hit
#[derive(Debug, Serialize)]
struct JsonHit<'a> {
    id: u32,
    name: &'a str,
    price: &'a str,
    category: String,
    score: u32,
}

impl<'a> From<&SearchResult<&'a Tour>> for JsonHit<'a> {
    fn from(r: &SearchResult<&'a Tour>) -> Self {
        Self {
            id: r.item.id,
            name: &r.item.name,
            price: &r.item.price,
            category: r.item.category.to_string(),
            score: r.score,
        }
    }
}

/// JSON output for the search command
#[derive(Debug, Serialize)]
struct JsonSearchOutput<'a> {
    query: &'a str,
    category: String,
    page: usize,
    per_page: usize,
    total_pages: usize,
    total_results: usize,
    pages: Vec<PageLink>,
    results: Vec<JsonHit<'a>>,
}

/// Run the search command
pub fn run(
    app: &App,
    query: &str,
    category: &CategoryFilter,
    page: usize,
    per_page: usize,
    format: &str,
) -> Result<i32> {
    let timer = Timer::start("search_ms");
    let results = app.catalog.search(category, query);
    timer.stop();
    metrics().increment("searches");

    let page = Page::of(&results, page, per_page);

    if format == "json" {
        let output = JsonSearchOutput {
            query,
            category: category.to_string(),
            page: page.number,
            per_page: page.per_page,
            total_pages: page.total_pages,
            total_results: page.total_items,
            pages: page.links(),
            results: page.items.iter().map(JsonHit::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(exit_code_for(results.len()));
    }

    let title = if query.trim().is_empty() {
        format!("Tours in {}", category.label())
    } else {
        format!("Tours matching \"{}\" in {}", query, category.label())
    };
    Status::header(&title);

    if results.is_empty() {
        Status::warning("No tours found. Try another keyword or category.");
        return Ok(exit_codes::NO_RESULTS);
    }

    Status::success(&format!(
        "{} found",
        format_count(page.total_items, "tour", "tours")
    ));
    for hit in page.items {
        print_hit(hit);
    }

    println!();
    println!(
        "  Page {} of {}  {}",
        page.number,
        page.total_pages,
        render_links(&page.links(), page.number).dimmed()
    );

    Ok(exit_codes::SUCCESS)
}

/// Run the suggest command
pub fn run_suggest(
    app: &App,
    query: &str,
    category: &CategoryFilter,
    limit: usize,
    format: &str,
) -> Result<i32> {
    let suggestions = app.catalog.suggestions(category, query, limit);
    metrics().increment("suggestions");

    if format == "json" {
        let names: Vec<serde_json::Value> = suggestions
            .iter()
            .map(|t| serde_json::json!({ "id": t.id, "name": t.name }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(exit_code_for(suggestions.len()));
    }

    if suggestions.is_empty() {
        Status::warning("No suggestions");
        return Ok(exit_codes::NO_RESULTS);
    }

    for tour in suggestions {
        println!("  {} {}", format!("#{:<3}", tour.id).dimmed(), tour.name);
    }

    Ok(exit_codes::SUCCESS)
}

fn print_hit(hit: &SearchResult<&Tour>) {
    let tour = hit.item;
    println!(
        "{} {} {}  {}",
        score_badge(hit.score),
        format!("#{:<3}", tour.id).dimmed(),
        tour.name.bold(),
        tour.price.cyan()
    );
    println!("          {}", truncate(&tour.description, 72).dimmed());
}

fn render_links(links: &[PageLink], current: usize) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Number(n) if *n == current => format!("[{}]", n),
            PageLink::Number(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn exit_code_for(count: usize) -> i32 {
    if count == 0 {
        exit_codes::NO_RESULTS
    } else {
        exit_codes::SUCCESS
    }
}
