//! Error type, configuration loading and input validation shared by the
//! tour catalog crates.
//!
//! ```rust,no_run
//! use tour_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("{} suggestions", config.schema.search.suggestion_limit);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCategory, ErrorCode, Result, ResultExt};

pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
