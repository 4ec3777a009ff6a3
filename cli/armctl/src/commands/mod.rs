//! CLI commands.

mod build;
mod check;
mod navigate;
mod parse;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// armctl - inspect and build hierarchical resource identifiers.
#[derive(Debug, Parser)]
#[command(name = "armctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (defaults to ARMCTL_FORMAT, then table).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse identifiers and show their components.
    Parse(parse::ParseCommand),

    /// Show the immediate parent of an identifier.
    Parent(navigate::ParentCommand),

    /// Show an identifier followed by all of its ancestors.
    Lineage(navigate::LineageCommand),

    /// Build an identifier from its components.
    Build(build::BuildCommand),

    /// Validate a list of identifiers, one per line.
    Check(check::CheckCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: &Config) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Parent(cmd) => cmd.run(&ctx),
            Commands::Lineage(cmd) => cmd.run(&ctx),
            Commands::Build(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("armctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
