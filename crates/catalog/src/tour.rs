//! Tour records and categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tour_core::Error;
use tour_search::Searchable;

/// Tour category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Temples, dance and village life
    Cultural,
    /// Beaches and water sports
    Beach,
    /// Waterfalls, lakes, rice terraces
    Nature,
    /// Treks, rafting, island trips
    Adventure,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Cultural,
        Category::Beach,
        Category::Nature,
        Category::Adventure,
    ];

    /// Identifier used in data files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Beach => "beach",
            Category::Nature => "nature",
            Category::Adventure => "adventure",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Cultural => "Cultural",
            Category::Beach => "Beach",
            Category::Nature => "Nature",
            Category::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_category(s))
    }
}

/// Category filter applied before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Only tours in this category
    Only(Category),
}

impl CategoryFilter {
    /// Every filter option, `All` first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Whether a tour passes the filter.
    #[inline]
    pub fn matches(&self, tour: &Tour) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => tour.category == *category,
        }
    }

    /// Button label; "Semua" means "all".
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Semua",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// A tour package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Unique id, also the detail route segment
    pub id: u32,
    /// Display name
    pub name: String,
    /// Card and detail description
    pub description: String,
    /// Display price, e.g. "Rp 450.000"
    pub price: String,
    /// Category for filtering
    pub category: Category,
    /// Card image path
    #[serde(default)]
    pub image: String,
    /// Inclusions listed on the detail page
    #[serde(default)]
    pub features: Vec<String>,
}

impl Tour {
    /// Numeric price made of the digits in `price`.
    ///
    /// `"Rp 450.000"` gives `Some(450000)`; no digits gives `None`.
    pub fn price_amount(&self) -> Option<u64> {
        let digits = price_digits(&self.price);
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }

    /// Schema.org `Product` description for the detail page.
    pub fn schema_org(&self) -> serde_json::Value {
        serde_json::json!({
            "@context": "https://schema.org",
            "@type": "Product",
            "name": self.name,
            "description": self.description,
            "image": self.image,
            "offers": {
                "@type": "Offer",
                "price": price_digits(&self.price),
                "priceCurrency": "IDR",
                "availability": "https://schema.org/InStock",
            },
        })
    }
}

impl Searchable for Tour {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

fn price_digits(price: &str) -> String {
    price.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_core::ErrorCode;

    fn tour(price: &str) -> Tour {
        Tour {
            id: 1,
            name: "Ubud Cultural Tour".to_string(),
            description: "Palace and rice terraces".to_string(),
            price: price.to_string(),
            category: Category::Cultural,
            image: "/images/tours/ubud.jpg".to_string(),
            features: vec![],
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("beach".parse::<Category>().unwrap(), Category::Beach);
        assert_eq!(" Nature ".parse::<Category>().unwrap(), Category::Nature);
        let err = "volcano".parse::<Category>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCategory);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "adventure".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Adventure)
        );
        assert!("".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_options_and_labels() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].label(), "Semua");
        assert_eq!(options[1].label(), "Cultural");
        assert_eq!(options[4].to_string(), "adventure");
    }

    #[test]
    fn test_filter_matches() {
        let t = tour("Rp 1");
        assert!(CategoryFilter::All.matches(&t));
        assert!(CategoryFilter::Only(Category::Cultural).matches(&t));
        assert!(!CategoryFilter::Only(Category::Beach).matches(&t));
    }

    #[test]
    fn test_price_amount() {
        assert_eq!(tour("Rp 450.000").price_amount(), Some(450_000));
        assert_eq!(tour("IDR 1,250,000 / person").price_amount(), Some(1_250_000));
        assert_eq!(tour("Call us").price_amount(), None);
    }

    #[test]
    fn test_schema_org() {
        let schema = tour("Rp 450.000").schema_org();
        assert_eq!(schema["@type"], "Product");
        assert_eq!(schema["name"], "Ubud Cultural Tour");
        assert_eq!(schema["offers"]["price"], "450000");
        assert_eq!(schema["offers"]["priceCurrency"], "IDR");
    }

    #[test]
    fn test_search_fields_order() {
        let t = tour("Rp 1");
        assert_eq!(t.search_fields(), vec!["Ubud Cultural Tour", "Palace and rice terraces"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let t: Tour = serde_json::from_str(
            r#"{"id": 7, "name": "Sekumpul", "description": "", "price": "Rp 1", "category": "nature"}"#,
        )
        .unwrap();
        assert!(t.features.is_empty());
        assert_eq!(t.category, Category::Nature);
    }
}
