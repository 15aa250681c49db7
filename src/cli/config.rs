//! Configuration file
//!
//! Optional JSON file; every field has a default so an empty object `{}` is a
//! complete configuration. Command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line
    Text,
    /// `{"status":"ok","data":{...}}`
    Json,
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// "text" or "json" (default "text")
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// trace, info, warn or error (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default for `to-binary --keep-leading-zeros`
    #[serde(default)]
    pub keep_leading_zeros: bool,
}

fn default_output_format() -> String {
    "text".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            log_level: default_log_level(),
            keep_leading_zeros: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.output_format()?;
        self.severity()?;
        Ok(())
    }

    /// Parsed output format
    pub fn output_format(&self) -> CliResult<OutputFormat> {
        match self.output_format.as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::config_error(format!(
                "Invalid output_format: '{}'. Must be 'text' or 'json'.",
                other
            ))),
        }
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(CliError::config_error)
    }
}
