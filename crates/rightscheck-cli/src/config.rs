//! Startup configuration for the CLI.
//!
//! Assembled once, before any command runs. The provider credential comes
//! from the environment and its absence aborts startup; everything else has
//! defaults that an optional TOML file and command-line/env overrides refine.

use crate::error::{CliError, Result};
use rightscheck_analyzer::AnalyzerConfig;
use rightscheck_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// Contents of the optional configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Provider endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Display settings
    #[serde(default)]
    pub settings: Settings,

    /// Analyzer tuning
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl FileConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Default configuration file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rightscheck").join("config.toml"))
    }

    /// Load `path` if given, otherwise the default file if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }
}

/// Values supplied on the command line or through the environment.
///
/// The API key is only ever read from `GEMINI_API_KEY`, never from a flag.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// API key (from `GEMINI_API_KEY`)
    pub api_key: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// Endpoint override
    pub endpoint: Option<String>,
}

impl Overrides {
    /// API key from the environment, if set.
    pub fn api_key_from_env() -> Option<String> {
        std::env::var(API_KEY_VAR).ok()
    }
}

/// Fully resolved application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Provider API key
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Provider endpoint
    pub endpoint: String,
    /// Display settings
    pub settings: Settings,
    /// Analyzer tuning
    pub analyzer: AnalyzerConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("settings", &self.settings)
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

impl AppConfig {
    /// Combine overrides with file settings, failing fast on a missing key.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let api_key = overrides
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingApiKey(API_KEY_VAR))?;

        file.analyzer.validate()?;

        Ok(Self {
            api_key,
            model: overrides
                .model
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: overrides
                .endpoint
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            settings: file.settings,
            analyzer: file.analyzer,
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rightscheck_analyzer::AnalyzerError;
    use std::io::Write;

    fn with_key() -> Overrides {
        Overrides {
            api_key: Some("test-key".to_string()),
            ..Overrides::default()
        }
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = AppConfig::resolve(Overrides::default(), FileConfig::default());
        assert!(matches!(result, Err(CliError::MissingApiKey(API_KEY_VAR))));

        let blank = Overrides {
            api_key: Some("  ".to_string()),
            ..Overrides::default()
        };
        assert!(AppConfig::resolve(blank, FileConfig::default()).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(with_key(), FileConfig::default()).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_overrides_beat_file() {
        let file = FileConfig {
            model: Some("file-model".to_string()),
            endpoint: Some("http://file".to_string()),
            ..FileConfig::default()
        };
        let overrides = Overrides {
            model: Some("cli-model".to_string()),
            ..with_key()
        };

        let config = AppConfig::resolve(overrides, file).unwrap();
        assert_eq!(config.model, "cli-model");
        assert_eq!(config.endpoint, "http://file");
    }

    #[test]
    fn test_invalid_analyzer_config_rejected() {
        let mut file = FileConfig::default();
        file.analyzer.backoff.max_retries = 0;
        assert!(matches!(
            AppConfig::resolve(with_key(), file),
            Err(CliError::Analyzer(AnalyzerError::Config(_)))
        ));
    }

    #[test]
    fn test_overflowing_backoff_is_config_error() {
        let mut file = FileConfig::default();
        file.analyzer.backoff.max_retries = 100;

        let err = AppConfig::resolve(with_key(), file).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: "));
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            model = "gemini-1.5-pro"

            [settings]
            format = "json"
            color = false

            [analyzer]
            analysis_timeout_secs = 30

            [analyzer.backoff]
            initial_delay_ms = 500
            "#
        )
        .unwrap();

        let config = FileConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(!config.settings.color);
        assert_eq!(config.analyzer.analysis_timeout_secs, 30);
        assert_eq!(config.analyzer.backoff.initial_delay_ms, 500);
        assert_eq!(config.analyzer.backoff.max_retries, 3);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AppConfig::resolve(with_key(), FileConfig::default()).unwrap();
        assert!(!format!("{:?}", config).contains("test-key"));
    }
}
