//! Configuration module

use std::path::Path;

use anyhow::{Context, Result};
use colligo_registry::ValidationConfig;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Registration thresholds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load and check a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validation
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
