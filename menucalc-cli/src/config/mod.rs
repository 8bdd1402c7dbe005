//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use menucalc_core::{InputReader, DEFAULT_MAX_LINE_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
}

/// Display-related configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the banner once at startup
    pub show_banner: bool,

    /// Wait for Enter after each result or error
    pub pause_after_result: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            pause_after_result: true,
        }
    }
}

/// Input-related configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Longest accepted input line in bytes
    pub max_line_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl InputConfig {
    /// Build the reader described by this section
    pub fn reader(&self) -> InputReader {
        InputReader::new().with_max_line_length(self.max_line_length)
    }
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.input.max_line_length == 0 {
            return Err(
                CliError::ConfigError("input.max_line_length must be positive".to_string()).into(),
            );
        }
        Ok(())
    }
}
