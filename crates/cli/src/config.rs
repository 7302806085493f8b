//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "alertsync.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Repository used when a definition does not name one.
    pub default_repository: Option<String>,
    pub output: OutputFormat,
    /// Tracing filter used when `RUST_LOG` is unset (e.g. `info`).
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load the configuration file, then apply environment overrides.
    ///
    /// A missing file at the default location is not an error; a missing
    /// file named explicitly is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.with_env(|var| std::env::var(var).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides.
    ///
    /// Reads:
    /// - `ALERTSYNC_REPOSITORY` (optional)
    /// - `ALERTSYNC_OUTPUT` (optional, `text` or `json`)
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(repository) = lookup("ALERTSYNC_REPOSITORY").filter(|r| !r.is_empty()) {
            self.default_repository = Some(repository);
        }
        if let Some(value) = lookup("ALERTSYNC_OUTPUT") {
            self.output = OutputFormat::parse(&value).ok_or(ConfigError::InvalidEnv {
                var: "ALERTSYNC_OUTPUT",
                value,
            })?;
        }
        Ok(self)
    }

    /// Override the default repository.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_repository = Some(repository.into());
        self
    }

    /// Override the output format.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn parses_all_fields() {
        let config = CliConfig::parse(
            r#"
            default_repository = "sandbox"
            output = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_repository.as_deref(), Some("sandbox"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn rejects_unknown_output() {
        assert!(CliConfig::parse(r#"output = "xml""#).is_err());
    }

    #[test]
    fn environment_overrides_file() {
        let config = CliConfig::parse(r#"default_repository = "sandbox""#)
            .unwrap()
            .with_env(env(&[
                ("ALERTSYNC_REPOSITORY", "prod"),
                ("ALERTSYNC_OUTPUT", "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.default_repository.as_deref(), Some("prod"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_env_output_is_reported() {
        let err = CliConfig::default()
            .with_env(env(&[("ALERTSYNC_OUTPUT", "xml")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"xml\" for ALERTSYNC_OUTPUT");
    }

    #[test]
    fn builders_override() {
        let config = CliConfig::default()
            .with_repository("sandbox")
            .with_output(OutputFormat::Json);
        assert_eq!(config.default_repository.as_deref(), Some("sandbox"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/alertsync.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
