//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use addrcheck_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How classification results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Address: ...` and `Type: ...` lines.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// File-level settings. CLI flags and env vars override every field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Result output format.
    #[serde(default)]
    pub output: OutputFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.output, OutputFormat::Human);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            output = "json"
            log_level = "debug"
        "#;
        let config = CliConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Human); // default
    }

    #[test]
    fn unknown_output_is_parse_error() {
        let err = CliConfig::from_toml_str(r#"output = "xml""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_format = \"json\"").unwrap();
        let config = CliConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn missing_file_returns_read_error() {
        let err = CliConfig::from_toml_file(Path::new("/nonexistent/addrcheck.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
