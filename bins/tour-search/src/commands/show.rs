//! Show command - tour detail page

use super::App;
use anyhow::Result;
use owo_colors::OwoColorize;
use tour_catalog::inquiry_link;
use tour_cli::Status;
use tour_core::error::exit_codes;

/// Run the show command
pub fn run(app: &App, id: &str, format: &str) -> Result<i32> {
    let tour = app.catalog.find_by_slug(id)?;
    let link = inquiry_link(&app.config.schema.contact, tour);

    if format == "json" {
        let output = serde_json::json!({
            "tour": tour,
            "schema_org": tour.schema_org(),
            "inquiry_link": link,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(exit_codes::SUCCESS);
    }

    Status::header(&tour.name);
    Status::field("Category", tour.category.label());
    Status::field("Price", &tour.price);
    Status::field("Image", &tour.image);
    println!();
    println!("  {}", tour.description);

    if !tour.features.is_empty() {
        println!();
        println!("  {}", "Includes".bold());
        for feature in &tour.features {
            println!("  {} {}", "•".green(), feature);
        }
    }

    println!();
    Status::field("Book", &link);
    Status::info(&format!("Link only: tour-search inquiry {}", tour.id));

    Ok(exit_codes::SUCCESS)
}
