//! The in-memory tour catalog and its search pipeline.

use crate::{CategoryFilter, Tour};
use serde::Deserialize;
use std::path::Path;
use tour_core::error::{Error, ErrorCode, Result, ResultExt};
use tour_core::validation::{Rule, Validator};
use tour_search::{rank, SearchResult};

const BUILTIN_CATALOG: &str = include_str!("../data/tours.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { tours: Vec<Tour> },
    Bare(Vec<Tour>),
}

impl CatalogFile {
    fn into_tours(self) -> Vec<Tour> {
        match self {
            CatalogFile::Wrapped { tours } | CatalogFile::Bare(tours) => tours,
        }
    }
}

/// Ordered, read-only list of tours.
///
/// Catalog order is the tie-breaker when search scores are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tours: Vec<Tour>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank names.
    pub fn new(tours: Vec<Tour>) -> Result<Self> {
        let validator = tours
            .iter()
            .fold(Validator::new(), |v, tour| {
                v.required(&format!("tours[{}].name", tour.id), &tour.name)
            })
            .unique("tours.id", tours.iter().map(|t| t.id));

        let result = validator.validate();
        if let Some(duplicate) = result.find(Rule::Unique) {
            tracing::warn!(error = %duplicate, "Catalog contains duplicate ids");
            let id = first_duplicate_id(&tours).unwrap_or_default();
            return Err(Error::duplicate_tour_id(id));
        }
        result.into_result(ErrorCode::CatalogError)?;

        Ok(Self { tours })
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG).context("Loading built-in catalog")
    }

    /// Parse a JSON catalog: either `{"tours": [...]}` or a bare array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.into_tours())
    }

    /// Parse a TOML catalog made of `[[tours]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct TomlCatalog {
            tours: Vec<Tour>,
        }

        let file: TomlCatalog = toml::from_str(content).map_err(|e| {
            Error::new(ErrorCode::CatalogParseError, format!("TOML parse error: {}", e))
                .with_source(e)
        })?;
        Self::new(file.tours)
    }

    /// Load a catalog file; `.toml` files are TOML, everything else JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let catalog = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
        .context(format!("Loading catalog {}", path.display()))?;

        tracing::info!(path = %path.display(), tours = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// All tours in catalog order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Whether the catalog has no tours.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Tour with the given id.
    pub fn get(&self, id: u32) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }

    /// Tour for a detail route segment such as `"3"`.
    pub fn find_by_slug(&self, slug: &str) -> Result<&Tour> {
        let invalid = || {
            Error::invalid_input(format!("Invalid tour id: '{}'", slug))
                .with_suggestion("Tour ids are positive whole numbers")
        };
        // `u32::from_str` also takes a leading `+`; route segments are digits only.
        if slug.is_empty() || !slug.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id: u32 = slug.parse().map_err(|_| invalid())?;

        self.get(id).ok_or_else(|| Error::tour_not_found(id))
    }

    /// Tours passing the category filter, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Tour> {
        self.tours.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Filter by category, then rank by `query`.
    ///
    /// A query with no searchable words returns the filtered tours in catalog
    /// order with score 0.
    pub fn search(&self, filter: &CategoryFilter, query: &str) -> Vec<SearchResult<&Tour>> {
        let filtered = self.filter(filter);
        let results: Vec<SearchResult<&Tour>> = rank(query, &filtered)
            .into_iter()
            .map(|r| SearchResult { item: *r.item, score: r.score })
            .collect();

        tracing::debug!(
            %filter,
            query,
            candidates = filtered.len(),
            matches = results.len(),
            "Search completed"
        );
        results
    }

    /// Live suggestions: the first `limit` search results.
    ///
    /// An empty query yields no suggestions.
    pub fn suggestions(&self, filter: &CategoryFilter, query: &str, limit: usize) -> Vec<&Tour> {
        if query.is_empty() {
            return Vec::new();
        }

        self.search(filter, query)
            .into_iter()
            .take(limit)
            .map(|r| r.item)
            .collect()
    }
}

fn first_duplicate_id(tours: &[Tour]) -> Option<u32> {
    let mut seen = std::collections::HashSet::new();
    tours.iter().map(|t| t.id).find(|id| !seen.insert(*id))
}
