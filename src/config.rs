//! Run configuration.
//!
//! Loaded from an optional TOML file; every key has a built-in default so an
//! empty file (or no file) is valid. Command-line values take precedence and
//! are merged in by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{PrismError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.figma.com";
pub const DEFAULT_OUTPUT_FILE: &str = "prismforge_simplified.json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scheme and host the `/v1/files` endpoint is resolved against
    pub api_base: String,
    /// Upper bound for the whole file request
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Where the reduced tree is written when no output argument is given
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| PrismError::config(e.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base).map_err(|e| {
            PrismError::config(format!("api_base '{}' is not a URL: {}", self.api_base, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PrismError::config(format!(
                "api_base must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(PrismError::config("timeout must be greater than zero"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(PrismError::config("output must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.api_base, "https://api.figma.com");
        assert_eq!(cfg.output, PathBuf::from("prismforge_simplified.json"));
        cfg.validate().unwrap();
    }

    #[test]
    fn parses_humantime_timeout_and_overrides() {
        let cfg = Config::from_toml_str(
            r#"
api_base = "http://127.0.0.1:8080"
timeout = "1m 30s"
output = "out/tree.json"
"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base, "http://127.0.0.1:8080");
        assert_eq!(cfg.timeout, Duration::from_secs(90));
        assert_eq!(cfg.output, PathBuf::from("out/tree.json"));
        cfg.validate().unwrap();
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("threshold = 0.9").unwrap_err();
        assert!(matches!(err, PrismError::Config(_)));
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = Config {
            api_base: "ftp://api.figma.com".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        cfg.api_base = "not a url".into();
        assert!(cfg.validate().is_err());

        cfg = Config {
            timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        cfg = Config {
            output: PathBuf::new(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout = \"5s\"").unwrap();
        let cfg = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_toml_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, PrismError::Io(_)));
    }
}
