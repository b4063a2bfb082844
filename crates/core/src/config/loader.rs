//! Locating and reading the TOML config file

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Checked in order when no `--config` is given; the first that exists wins.
const SEARCH_PATHS: [&str; 3] = [
    ".tour-catalog.toml",
    "tour-catalog.toml",
    ".config/tour-catalog.toml",
];

/// Validated settings plus the file they came from, if any
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Read `path`, or the first of the search paths that exists, falling back
    /// to built-in defaults. A `path` that does not exist is an error rather
    /// than a silent fallback.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(PathBuf::from(p)),
            None => SEARCH_PATHS.into_iter().map(PathBuf::from).find(|p| p.exists()),
        };

        let schema = match &path {
            Some(p) => read_schema(p)?,
            None => ConfigSchema::default(),
        };
        schema.validate()?;

        tracing::debug!(path = ?path, "Configuration loaded");
        Ok(Self { schema, path })
    }

    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

fn read_schema(path: &Path) -> Result<ConfigSchema> {
    let context = || format!("Reading config {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(context())?;
    let schema = toml::from_str(&text).map_err(Error::from).context(context())?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.suggestion_limit, 5);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[search]\nsuggestion_limit = 3\n\n[contact]\nphone = \"+6281111111\""
        )
        .unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.schema.search.suggestion_limit, 3);
        assert_eq!(config.schema.contact.phone, "+6281111111");
        assert_eq!(config.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_config_load_missing_explicit_file() {
        let err = Config::load(Some("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\nsuggestion_limit = ").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_config_load_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nsuggestion_limit = 0").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }
}
