//! Report generation.
//!
//! This module renders an aggregation as plain text or JSON and writes
//! the result to stdout or a file.

use crate::models::{Aggregation, OutputFormat};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Generate the text report.
///
/// With `show_terms` every term gets its own `n! = value` line before the
/// `{label}: {total}` line.
pub fn generate_text_report(aggregation: &Aggregation, label: &str, show_terms: bool) -> String {
    let mut output = String::new();

    if show_terms {
        for term in &aggregation.terms {
            output.push_str(&format!("{}! = {}\n", term.n, term.factorial));
        }
    }

    output.push_str(&format!("{}: {}\n", label, aggregation.total));

    output
}

/// Generate a JSON report.
pub fn generate_json_report(aggregation: &Aggregation) -> Result<String> {
    let mut json = serde_json::to_string_pretty(aggregation)?;
    json.push('\n');
    Ok(json)
}

/// Whether rendering in `format` reads the individual terms.
pub fn needs_terms(format: OutputFormat, show_terms: bool) -> bool {
    match format {
        OutputFormat::Text => show_terms,
        OutputFormat::Json => true,
    }
}

/// Render the report in the requested format.
pub fn render(
    aggregation: &Aggregation,
    format: OutputFormat,
    label: &str,
    show_terms: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(aggregation, label, show_terms)),
        OutputFormat::Json => generate_json_report(aggregation),
    }
}

/// Write rendered output to a file, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display())),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(content.as_bytes())
                .and_then(|_| handle.flush())
                .context("Failed to write report to stdout")
        }
    }
}
