//! Subcommand implementations

pub mod categories;
pub mod inquiry;
pub mod score;
pub mod search;
pub mod show;

use tour_catalog::{Catalog, PageSizes};
use tour_core::config::Config;
use tour_core::error::{Error, Result};

/// Loaded configuration and catalog shared by catalog commands
pub struct App {
    pub config: Config,
    pub catalog: Catalog,
}

impl App {
    /// Load configuration, then the configured (or built-in) catalog
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let config = Config::load(config_path)?;

        let catalog = match &config.schema.catalog.path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };

        tracing::debug!(
            config = ?config.path,
            tours = catalog.len(),
            "Application loaded"
        );

        Ok(Self { config, catalog })
    }

    /// Page size from an explicit value, a viewport width, or the desktop default
    pub fn page_size(&self, per_page: Option<usize>, width: Option<u32>) -> Result<usize> {
        let sizes = PageSizes::from(&self.config.schema.pagination);

        match (per_page, width) {
            (Some(0), _) => Err(Error::invalid_input("--per-page must be at least 1")),
            (Some(n), _) => Ok(n),
            (None, Some(w)) => Ok(sizes.per_page_for_width(w)),
            (None, None) => Ok(sizes.desktop()),
        }
    }
}
