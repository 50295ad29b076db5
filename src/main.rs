//! factagg - factorial aggregation CLI
//!
//! Computes the factorial of every value in an inclusive range, sums them,
//! and prints the total. With no arguments it prints the sum of 1! to 5!:
//!
//!   Aggregated factorial: 153
//!
//! Exit codes:
//!   0 - Success
//!   1 - Error (invalid arguments, config, checked overflow, write failure)

mod cli;
mod config;
mod factorial;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args)?;

    info!("factagg v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Aggregation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .factagg.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", CONFIG_FILE_NAME);
        std::process::exit(1);
    }

    let content = Config::default_toml()?;
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging on stderr so stdout only carries the report.
fn init_logging(args: &Args) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(args.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

/// Compute the aggregation and write the report.
fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args)?;
    config.merge_with_args(args);

    info!(
        "Summing factorials {}..={} ({} arithmetic)",
        config.range.start, config.range.end, config.compute.arithmetic
    );

    let keep_terms = report::needs_terms(config.output.format, config.output.show_terms);

    let aggregation = factorial::aggregate(
        config.range.start,
        config.range.end,
        config.compute.arithmetic,
        keep_terms,
    )?;

    if aggregation.is_empty() {
        warn!(
            "Empty range {}..={}, total is 0",
            aggregation.start, aggregation.end
        );
    }

    debug!(
        "Aggregated {} terms, total has {} bits",
        aggregation.term_count(),
        aggregation.total.bits()
    );

    let output = report::render(
        &aggregation,
        config.output.format,
        &config.output.label,
        config.output.show_terms,
    )?;

    report::write_output(&output, args.output.as_deref())?;

    if let Some(ref path) = args.output {
        info!("Report saved to {}", path.display());
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
