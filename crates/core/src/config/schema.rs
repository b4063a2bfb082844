//! Configuration schema definitions

use crate::error::{ErrorCode, Result};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};

/// Default inquiry message; `{name}` and `{price}` are replaced per tour.
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Halo, saya tertarik dengan tur: {name} ({price}). Bisakah saya dapatkan detail lebih lanjut?";

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

impl ConfigSchema {
    /// Check values that serde accepts but the catalog cannot use
    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .positive("search.suggestion_limit", self.search.suggestion_limit)
            .positive("pagination.mobile_per_page", self.pagination.mobile_per_page)
            .positive("pagination.tablet_per_page", self.pagination.tablet_per_page)
            .positive("pagination.desktop_per_page", self.pagination.desktop_per_page)
            .ascending(
                "pagination.breakpoints",
                self.pagination.mobile_breakpoint,
                self.pagination.tablet_breakpoint,
            )
            .phone("contact.phone", &self.contact.phone)
            .required("contact.message_template", &self.contact.message_template)
            .validate()
            .into_result(ErrorCode::ConfigValidationError)
    }
}

/// Where tours come from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External catalog file (JSON or TOML); the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Search behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum live suggestions shown under the search box
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    5
}

/// Page sizes by viewport width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Widths below this use `mobile_per_page`
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Widths below this (and at least `mobile_breakpoint`) use `tablet_per_page`
    #[serde(default = "default_tablet_breakpoint")]
    pub tablet_breakpoint: u32,

    #[serde(default = "default_mobile_per_page")]
    pub mobile_per_page: usize,

    #[serde(default = "default_tablet_per_page")]
    pub tablet_per_page: usize,

    #[serde(default = "default_desktop_per_page")]
    pub desktop_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            tablet_breakpoint: default_tablet_breakpoint(),
            mobile_per_page: default_mobile_per_page(),
            tablet_per_page: default_tablet_per_page(),
            desktop_per_page: default_desktop_per_page(),
        }
    }
}

fn default_mobile_breakpoint() -> u32 {
    640
}

fn default_tablet_breakpoint() -> u32 {
    1024
}

fn default_mobile_per_page() -> usize {
    3
}

fn default_tablet_per_page() -> usize {
    4
}

fn default_desktop_per_page() -> usize {
    6
}

/// Inquiry contact settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// WhatsApp number including country code
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Message template with `{name}` and `{price}` placeholders
    #[serde(default = "default_message_template")]
    pub message_template: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            message_template: default_message_template(),
        }
    }
}

fn default_phone() -> String {
    "+621234567890".to_string()
}

fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}
