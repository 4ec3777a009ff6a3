//! Check command: validate identifiers read from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use armkit_id::ResourceIdentifier;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Validate a list of identifiers, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// File to read ("-" or omitted for stdin).
    file: Option<PathBuf>,
}

/// An input line that failed to parse.
#[derive(Debug, Clone, Serialize, Tabled)]
struct CheckFailure {
    #[tabled(rename = "Line")]
    line: usize,

    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Error")]
    error: String,
}

/// Outcome of checking a list of identifiers.
#[derive(Debug, Default, Serialize)]
struct CheckReport {
    total: usize,
    valid: usize,
    failures: Vec<CheckFailure>,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let report = match self.file.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                check_lines(BufReader::new(file))?
            }
            _ => check_lines(io::stdin().lock())?,
        };

        match ctx.format {
            OutputFormat::Json => print_single(&report),
            OutputFormat::Table if report.failures.is_empty() => {
                print_success(&format!("{} identifiers are valid.", report.total));
            }
            OutputFormat::Table => print_output(&report.failures, ctx.format),
        }

        if report.failures.is_empty() {
            Ok(())
        } else {
            Err(CliError::CheckFailed {
                invalid: report.failures.len(),
                total: report.total,
            }
            .into())
        }
    }
}

fn check_lines(reader: impl BufRead) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let input = line.trim();
        if input.is_empty() || input.starts_with('#') {
            continue;
        }

        report.total += 1;
        match ResourceIdentifier::parse(input) {
            Ok(resource) => {
                debug!(line = index + 1, id = %resource, "Valid identifier");
                report.valid += 1;
            }
            Err(e) => {
                warn!(line = index + 1, error = %e, "Invalid identifier");
                report.failures.push(CheckFailure {
                    line: index + 1,
                    input: input.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
