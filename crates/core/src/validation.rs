//! Collect-all-problems checks for config and catalog input.
//!
//! ```rust
//! use tour_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "Ubud Cultural Tour")
//!     .positive("per_page", 6)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{6,15}$").expect("phone pattern is valid"));

/// Which check a [`Violation`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Positive,
    Ascending,
    Phone,
    Unique,
}

/// One failed check on one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Everything a [`Validator`] found wrong
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// First violation of `rule`, if any
    pub fn find(&self, rule: Rule) -> Option<&Violation> {
        self.violations.iter().find(|v| v.rule == rule)
    }

    fn push(&mut self, field: &str, rule: Rule, message: impl Into<String>) {
        self.violations.push(Violation {
            field: field.to_string(),
            rule,
            message: message.into(),
        });
    }

    /// `Ok` when clean, otherwise one error with `code` listing every violation
    pub fn into_result(self, code: ErrorCode) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let listed = self
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::new(code, format!("Validation failed: {listed}")))
    }
}

/// Chainable checks; each failing check records a [`Violation`] and the chain
/// carries on
#[derive(Debug, Default)]
pub struct Validator {
    result: ValidationResult,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blank after trimming
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.push(field, Rule::Required, "must not be blank");
        }
        self
    }

    /// Greater than zero
    pub fn positive(mut self, field: &str, value: usize) -> Self {
        if value == 0 {
            self.result.push(field, Rule::Positive, "must be at least 1");
        }
        self
    }

    /// `lower < upper`
    pub fn ascending(mut self, field: &str, lower: u32, upper: u32) -> Self {
        if lower >= upper {
            self.result
                .push(field, Rule::Ascending, format!("{lower} must be below {upper}"));
        }
        self
    }

    /// Digits only, optionally prefixed with `+`
    pub fn phone(mut self, field: &str, value: &str) -> Self {
        if !PHONE_RE.is_match(value) {
            self.result.push(
                field,
                Rule::Phone,
                format!("'{value}' is not a phone number like +621234567890"),
            );
        }
        self
    }

    /// Every repeat of an already-seen key is a violation
    pub fn unique<K, I>(mut self, field: &str, keys: I) -> Self
    where
        K: Eq + Hash + Display,
        I: IntoIterator<Item = K>,
    {
        let mut seen = HashSet::new();
        for key in keys {
            let label = key.to_string();
            if !seen.insert(key) {
                self.result.push(field, Rule::Unique, format!("{label} appears more than once"));
            }
        }
        self
    }

    pub fn validate(self) -> ValidationResult {
        self.result
    }
}
