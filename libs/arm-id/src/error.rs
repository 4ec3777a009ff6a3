//! Error types for identifier parsing and construction.

use thiserror::Error;

/// Errors that can occur when parsing or constructing a resource identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The input string is not a structurally valid identifier.
    #[error("invalid resource identifier '{input}': {reason}")]
    InvalidIdentifier { input: String, reason: String },

    /// A component passed to direct construction is invalid.
    #[error("invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },
}

impl ResourceIdError {
    pub(crate) fn invalid_identifier(input: &str, reason: impl Into<String>) -> Self {
        ResourceIdError::InvalidIdentifier {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        ResourceIdError::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Returns true if this error was raised while parsing a string.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, ResourceIdError::InvalidIdentifier { .. })
    }

    /// Returns true if this error was raised by direct construction.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ResourceIdError::InvalidArgument { .. })
    }

    /// The rejected input string, for parse errors.
    pub fn input(&self) -> Option<&str> {
        match self {
            ResourceIdError::InvalidIdentifier { input, .. } => Some(input.as_str()),
            ResourceIdError::InvalidArgument { .. } => None,
        }
    }

    /// The offending parameter name, for construction errors.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            ResourceIdError::InvalidArgument { parameter, .. } => Some(*parameter),
            ResourceIdError::InvalidIdentifier { .. } => None,
        }
    }
}
