//! Tour catalog: records, category filtering, search, suggestions and paging.
//!
//! # Example
//!
//! ```
//! use tour_catalog::{Catalog, CategoryFilter};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let results = catalog.search(&CategoryFilter::All, "ubud");
//! assert_eq!(results[0].item.name, "Ubud Cultural Tour");
//! ```

mod catalog;
mod inquiry;
pub mod pagination;
mod tour;

pub use catalog::Catalog;
pub use inquiry::{inquiry_link, inquiry_message};
pub use pagination::{total_pages, visible_pages, Page, PageLink, PageSizes};
pub use tour::{Category, CategoryFilter, Tour};
pub use tour_search::SearchResult;
