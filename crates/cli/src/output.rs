//! Coloured terminal output for the human `--format text` mode.
//!
//! Results go to stdout; warnings and errors go to stderr so piping a search
//! into another tool only carries results.

use owo_colors::OwoColorize;

/// One-line status messages, each prefixed with a coloured glyph
pub struct Status;

impl Status {
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// To stderr
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// To stderr
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Bold title underlined to its own width
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Indented `label: value` line with labels aligned
    pub fn field(label: &str, value: &str) {
        println!("  {:<12} {}", format!("{}:", label).dimmed(), value);
    }
}

/// Colour a summed match score by strength
pub fn score_badge(score: u32) -> String {
    let text = format!("{:>4}", score);
    if score >= 100 {
        text.green().bold().to_string()
    } else if score >= 60 {
        text.green().to_string()
    } else if score > 0 {
        text.yellow().to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// Shorten text to at most `max` characters, ending with an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

/// `1 tour`, `3 tours`
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}
