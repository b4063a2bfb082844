//! Error type shared by the catalog, config and CLI layers
//!
//! An [`Error`] pairs a stable [`ErrorCode`] with a message, plus optional
//! context ("while doing X") and a hint for the user. The CLI maps the code's
//! [`ErrorCategory`] to a process exit status and, with `--format json`,
//! prints [`ErrorReport`] instead of the human form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Broad family an [`ErrorCode`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Unexpected or internal failures
    General,
    /// Reading files
    IO,
    /// Config file lookup, parsing and values
    Configuration,
    /// Catalog data and tour lookups
    Catalog,
    /// Bad user input
    Validation,
}

impl ErrorCategory {
    /// Process exit status used when an error of this family reaches `main`
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Configuration => exit_codes::CONFIG_ERROR,
            Self::Catalog => exit_codes::CATALOG_ERROR,
            Self::Validation => exit_codes::VALIDATION_ERROR,
            Self::General | Self::IO => exit_codes::FAILURE,
        }
    }
}

/// Stable numeric error codes, rendered as `E<nnnn>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum ErrorCode {
    Unknown = 1000,
    Internal = 1001,

    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    ConfigValidationError = 3003,

    CatalogError = 4000,
    CatalogParseError = 4001,
    TourNotFound = 4002,
    UnknownCategory = 4003,
    DuplicateTourId = 4004,

    ValidationError = 6000,
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Numeric value, e.g. `4002`
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Family this code belongs to
    pub fn category(self) -> ErrorCategory {
        use ErrorCode::*;
        match self {
            Unknown | Internal => ErrorCategory::General,
            IoError | FileNotFound | PermissionDenied => ErrorCategory::IO,
            ConfigError | ConfigNotFound | ConfigParseError | ConfigValidationError => {
                ErrorCategory::Configuration
            }
            CatalogError | CatalogParseError | TourNotFound | UnknownCategory
            | DuplicateTourId => ErrorCategory::Catalog,
            ValidationError | InvalidInput => ErrorCategory::Validation,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Error carried through every fallible catalog, config and CLI operation
#[derive(Error, Debug)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    /// What was being attempted when this failed
    pub context: Option<String>,
    /// What the user can do about it
    pub suggestion: Option<String>,
    #[source]
    pub source: Option<BoxedSource>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)?;
        for (label, text) in [("while", &self.context), ("hint", &self.suggestion)] {
            if let Some(text) = text {
                write!(f, "\n  {label}: {text}")?;
            }
        }
        Ok(())
    }
}

impl Error {
    /// Error with a code and message, no context or hint
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Set what was being attempted
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Set a hint the user can act on
    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: Some(suggestion.into()),
            ..self
        }
    }

    /// Keep the underlying error as the `source()`
    pub fn with_source(self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..self
        }
    }

    /// Shorthand for `self.code.category()`
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Exit status for the CLI
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    /// Serializable form for `--format json`
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code.to_string(),
            kind: self.code,
            category: self.category(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            cause: self.source.as_ref().map(ToString::to_string),
        }
    }

    /// Generic I/O failure
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// A file the user pointed at does not exist
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().display();
        Self::new(ErrorCode::FileNotFound, format!("No such file: {path}"))
            .with_suggestion("Check the path and that the file is readable")
    }

    /// Generic configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// An explicit `--config` path does not exist
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().display();
        Self::new(ErrorCode::ConfigNotFound, format!("No config file at {path}"))
            .with_suggestion("Drop the --config flag to use the defaults, or fix the path")
    }

    /// Generic catalog failure
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogError, message)
    }

    /// No tour with this id
    pub fn tour_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::TourNotFound, format!("Tour not found: {id}"))
            .with_suggestion("Run `tour-search search \"\"` to list available tour ids")
    }

    /// Category name outside the known set
    pub fn unknown_category(name: &str) -> Self {
        Self::new(ErrorCode::UnknownCategory, format!("Unknown category: {name}"))
            .with_suggestion("Use one of: all, cultural, beach, nature, adventure")
    }

    /// Two tours share an id
    pub fn duplicate_tour_id(id: u32) -> Self {
        Self::new(ErrorCode::DuplicateTourId, format!("Duplicate tour id: {id}"))
            .with_suggestion("Give every tour in the catalog file a unique id")
    }

    /// Collected validation failures
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Malformed user input such as a non-numeric id
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

/// JSON shape of an [`Error`] for `--format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// `E<nnnn>` form of the code
    pub code: String,
    pub kind: ErrorCode,
    pub category: ErrorCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// Result alias over [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit statuses of the `tour-search` binary
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const CATALOG_ERROR: i32 = 4;
    /// The command ran fine but matched nothing
    pub const NO_RESULTS: i32 = 5;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        let code = match err.kind() {
            ErrorKind::NotFound => ErrorCode::FileNotFound,
            ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Self::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::CatalogParseError, format!("Invalid catalog JSON: {err}"))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::new(ErrorCode::ConfigParseError, format!("Invalid TOML: {err}")).with_source(err)
    }
}

/// Attach context or a hint to the error side of a [`Result`]
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_renders_padded() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::TourNotFound.to_string(), "E4002");
    }

    #[test]
    fn test_code_categories() {
        assert_eq!(ErrorCode::Internal.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::PermissionDenied.category(), ErrorCategory::IO);
        assert_eq!(ErrorCode::ConfigParseError.category(), ErrorCategory::Configuration);
        assert_eq!(ErrorCode::DuplicateTourId.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::InvalidInput.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_display_includes_context_and_hint() {
        let err = Error::file_not_found("/path/to/tours.json").with_context("loading the catalog");
        let text = err.to_string();

        assert!(text.starts_with("No such file: /path/to/tours.json (E2001)"));
        assert!(text.contains("\n  while: loading the catalog"));
        assert!(text.contains("\n  hint: "));
    }

    #[test]
    fn test_display_without_extras_is_one_line() {
        assert_eq!(Error::catalog("empty").to_string(), "empty (E4000)");
    }

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(Error::tour_not_found(9).exit_code(), exit_codes::CATALOG_ERROR);
        assert_eq!(Error::config("bad").exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(Error::invalid_input("bad").exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(Error::io("bad").exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_result_ext() {
        let result: Result<()> = Err(Error::catalog("empty"));
        let err = result
            .context("searching")
            .with_suggestion("add some tours")
            .unwrap_err();

        assert_eq!(err.context.as_deref(), Some("searching"));
        assert_eq!(err.suggestion.as_deref(), Some("add some tours"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);

        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_report_json() {
        let report = Error::unknown_category("volcano").to_report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["code"], "E4003");
        assert_eq!(json["kind"], "UNKNOWN_CATEGORY");
        assert_eq!(json["category"], "Catalog");
        assert!(json.get("context").is_none());
        assert!(json.get("cause").is_none());
    }
}
