//! armctl - inspect and build hierarchical resource identifiers.
//!
//! Parses identifiers, walks their ancestor chain, builds new identifiers from
//! components, and validates identifier lists.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    // Prefer RUST_LOG, fall back to ARMCTL_LOG_LEVEL
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(format = ?config.format, log_level = %config.log_level, "Configuration loaded");

    cli.run(&config)
}
