//! Inquiry command - WhatsApp deep link for a tour

use super::App;
use anyhow::Result;
use tour_catalog::inquiry_link;
use tour_core::error::exit_codes;

/// Run the inquiry command
pub fn run(app: &App, id: &str, format: &str) -> Result<i32> {
    let tour = app.catalog.find_by_slug(id)?;
    let link = inquiry_link(&app.config.schema.contact, tour);
    tracing::debug!(tour_id = tour.id, "Inquiry link built");

    if format == "json" {
        let output = serde_json::json!({ "id": tour.id, "link": link });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", link);
    }

    Ok(exit_codes::SUCCESS)
}
