//! CLI configuration (env-driven).

use anyhow::Result;
use clap::ValueEnum;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Environment variable selecting the default output format.
const FORMAT_VAR: &str = "ARMCTL_FORMAT";

/// Environment variable selecting the log level when `RUST_LOG` is unset.
const LOG_LEVEL_VAR: &str = "ARMCTL_LOG_LEVEL";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default output format; `--format` overrides it.
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let format = match lookup(FORMAT_VAR) {
            Some(value) => OutputFormat::from_str(value.trim(), true).map_err(|_| {
                CliError::Config(format!(
                    "{FORMAT_VAR} must be 'table' or 'json', got '{value}'"
                ))
            })?,
            None => defaults.format,
        };

        let log_level = lookup(LOG_LEVEL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Self { format, log_level })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_reads_format_and_level() {
        let config = Config::from_lookup(lookup_from(&[
            ("ARMCTL_FORMAT", "JSON"),
            ("ARMCTL_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = Config::from_lookup(lookup_from(&[("ARMCTL_FORMAT", "yaml")])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Config(_))
        ));
    }
}
