//! tour-search: search and browse the tour package catalog from the terminal.

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tour_catalog::CategoryFilter;
use tour_cli::Status;
use tour_core::error::exit_codes;
use tour_telemetry::TelemetryConfig;

mod commands;

use commands::{categories, inquiry, score, search, show, App};

/// Search and browse the tour package catalog
#[derive(Parser)]
#[command(name = "tour-search")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .tour-catalog.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Print collected metrics to stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter by category and rank tours against a query
    Search {
        /// Free-text query; empty lists every tour in the category
        query: String,

        /// Category filter (all, cultural, beach, nature, adventure)
        #[arg(short = 'C', long, default_value = "all")]
        category: CategoryFilter,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Tours per page
        #[arg(long, conflicts_with = "width")]
        per_page: Option<usize>,

        /// Viewport width in pixels, picks the page size like the site does
        #[arg(long)]
        width: Option<u32>,
    },

    /// Live suggestions for a partially typed query
    Suggest {
        /// Query typed so far
        query: String,

        /// Category filter (all, cultural, beach, nature, adventure)
        #[arg(short = 'C', long, default_value = "all")]
        category: CategoryFilter,

        /// Maximum suggestions (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one tour in detail
    Show {
        /// Tour id
        id: String,
    },

    /// List categories with their tour counts
    Categories,

    /// Score one query token against one text
    Score {
        /// Query token
        query: String,

        /// Text to match against
        text: String,
    },

    /// Levenshtein edit distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,
    },

    /// Print the WhatsApp inquiry link for a tour
    Inquiry {
        /// Tour id
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    }
    .with_json(cli.log_format == LogFormat::Json);
    if let Err(e) = tour_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => report_error(&err, &cli.format),
    };

    if cli.metrics {
        let metrics = tour_telemetry::metrics().export_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&metrics).unwrap_or_else(|_| metrics.to_string())
        );
    }

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let format = cli.format.as_str();
    let load = || App::load(cli.config.as_deref());

    match &cli.command {
        Commands::Search { query, category, page, per_page, width } => {
            let app = load()?;
            let per_page = app.page_size(*per_page, *width)?;
            search::run(&app, query, category, *page, per_page, format)
        }
        Commands::Suggest { query, category, limit } => {
            let app = load()?;
            let limit = limit.unwrap_or(app.config.schema.search.suggestion_limit);
            search::run_suggest(&app, query, category, limit, format)
        }
        Commands::Show { id } => show::run(&load()?, id, format),
        Commands::Categories => categories::run(&load()?, format),
        Commands::Inquiry { id } => inquiry::run(&load()?, id, format),
        Commands::Score { query, text } => score::run_score(query, text, format),
        Commands::Distance { a, b } => score::run_distance(a, b, format),
    }
}

fn report_error(err: &anyhow::Error, format: &str) -> i32 {
    match err.downcast_ref::<tour_core::Error>() {
        Some(e) => {
            if format == "json" {
                let report = serde_json::to_string_pretty(&e.to_report())
                    .unwrap_or_else(|_| e.message.clone());
                eprintln!("{}", report);
            } else {
                Status::error(&e.to_string());
            }
            e.exit_code()
        }
        None => {
            Status::error(&format!("{:#}", err));
            exit_codes::FAILURE
        }
    }
}
