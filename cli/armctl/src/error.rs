//! Error handling and display for the CLI.

use armkit_id::ResourceIdError;
use colored::Colorize;
use thiserror::Error;

/// Shape of a valid identifier, shown when parsing fails.
const ID_FORMAT: &str =
    "subscriptions/{id}/resourceGroups/{group}/providers/{namespace}[/{type}/{name}]*/{type}/{name}";

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid ancestor '{0}': expected TYPE=NAME")]
    InvalidAncestor(String),

    #[error("{invalid} of {total} identifiers are invalid")]
    CheckFailed { invalid: usize, total: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(id_err) = err.downcast_ref::<ResourceIdError>() {
        return Some(match id_err {
            ResourceIdError::InvalidIdentifier { .. } => format!("Hint: Expected {ID_FORMAT}."),
            ResourceIdError::InvalidArgument { parameter, .. } => {
                format!("Hint: Check the value passed for '{parameter}'.")
            }
        });
    }

    match err.downcast_ref::<CliError>()? {
        CliError::InvalidAncestor(_) => {
            Some("Hint: Pass ancestors as --ancestor TYPE=NAME, outermost first.".to_string())
        }
        CliError::Config(_) => {
            Some("Hint: Valid ARMCTL_FORMAT values are table and json.".to_string())
        }
        CliError::CheckFailed { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_parse_error() {
        let err: anyhow::Error = armkit_id::ResourceIdentifier::parse("/subscriptions")
            .unwrap_err()
            .into();
        let hint = hint_for(&err).unwrap();
        assert!(hint.contains("resourceGroups"));
    }

    #[test]
    fn test_hint_for_argument_error() {
        let err: anyhow::Error =
            armkit_id::ResourceIdentifier::top_level("S1", "", "Prov.X", "typeA", "name1")
                .unwrap_err()
                .into();
        let hint = hint_for(&err).unwrap();
        assert!(hint.contains("resource_group_name"));
    }

    #[test]
    fn test_no_hint_for_check_failure() {
        let err: anyhow::Error = CliError::CheckFailed {
            invalid: 1,
            total: 3,
        }
        .into();
        assert_eq!(err.to_string(), "1 of 3 identifiers are invalid");
        assert!(hint_for(&err).is_none());
    }
}
