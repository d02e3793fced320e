//! Error types for the standings engine
//!
//! The engine reports failures through a single typed enum so callers can
//! tell a bad input snapshot apart from a bad configuration. Application
//! code (config files, the CLI) wraps these in `anyhow` with context.

use crate::types::Bracket;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, StandingsError>;

/// Failures raised by the stage that detects them
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StandingsError {
    /// A required field is missing or non-numeric on a record
    #[error("Schema error on team '{team}', field '{field}': {reason}")]
    SchemaError {
        team: String,
        field: String,
        reason: String,
    },

    /// Invalid group count, empty or inconsistent rule list, bad cutoffs
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    /// A bracket has no members to rank
    #[error("Insufficient data: {bracket} bracket has no members to rank")]
    InsufficientDataError { bracket: Bracket },
}

impl StandingsError {
    pub(crate) fn schema(team: &str, field: &str, reason: impl Into<String>) -> Self {
        Self::SchemaError {
            team: team.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }
}
