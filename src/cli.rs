//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and log level selection.

use crate::models::{Arithmetic, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// factagg - sum a range of factorials
///
/// With no arguments, prints the sum of 1! through 5!.
///
/// Examples:
///   factagg
///   factagg --start 1 --end 30 --show-terms
///   factagg --end 25 --arithmetic checked
///   factagg --format json --output totals.json
///   factagg --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// First value of the range (inclusive)
    ///
    /// Overrides `range.start` from the config file. Default: 1.
    #[arg(long, value_name = "N")]
    pub start: Option<u64>,

    /// Last value of the range (inclusive)
    ///
    /// Overrides `range.end` from the config file. Default: 5.
    #[arg(long, value_name = "N")]
    pub end: Option<u64>,

    /// Arithmetic used for each factorial
    ///
    /// `checked` uses 64-bit integers and fails once a factorial no longer fits.
    #[arg(long, value_name = "MODE")]
    pub arithmetic: Option<Arithmetic>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print every `n! = value` term before the total
    #[arg(long, conflicts_with = "hide_terms")]
    pub show_terms: bool,

    /// Print only the total, even if the config file enables terms
    #[arg(long, conflicts_with = "show_terms")]
    pub hide_terms: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .factagg.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "FACTAGG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .factagg.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref output) = self.output {
            if output.is_dir() {
                return Err(format!("Output path is a directory: {}", output.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    /// Returns the log filter.
    ///
    /// `--verbose` and `--quiet` pin the level; otherwise `RUST_LOG` applies,
    /// falling back to the default level.
    pub fn log_filter(&self) -> EnvFilter {
        let level = LevelFilter::from_level(self.log_level());

        if self.verbose || self.quiet {
            EnvFilter::default().add_directive(level.into())
        } else {
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy()
        }
    }
}
