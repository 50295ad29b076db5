//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.factagg.toml` files.

use crate::models::{Arithmetic, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".factagg.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Range settings.
    #[serde(default)]
    pub range: RangeConfig,

    /// Arithmetic settings.
    #[serde(default)]
    pub compute: ComputeConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Inclusive range of values whose factorials are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// First value (inclusive).
    #[serde(default = "default_start")]
    pub start: u64,

    /// Last value (inclusive).
    #[serde(default = "default_end")]
    pub end: u64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

fn default_start() -> u64 {
    1
}

fn default_end() -> u64 {
    5
}

/// How each factorial is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputeConfig {
    /// Arithmetic used for each factorial.
    #[serde(default)]
    pub arithmetic: Arithmetic,
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Text printed before the total.
    #[serde(default = "default_label")]
    pub label: String,

    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print every term before the total (text format only).
    #[serde(default)]
    pub show_terms: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            format: OutputFormat::default(),
            show_terms: false,
        }
    }
}

fn default_label() -> String {
    "Aggregated factorial".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from a directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Try to load configuration from the working directory.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// Only values the user passed explicitly override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(start) = args.start {
            self.range.start = start;
        }
        if let Some(end) = args.end {
            self.range.end = end;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(arithmetic) = args.arithmetic {
            self.compute.arithmetic = arithmetic;
        }

        // Term listing - only override if explicitly provided via CLI flags
        if args.show_terms {
            self.output.show_terms = true;
        } else if args.hide_terms {
            self.output.show_terms = false;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")
    }
}
