//! Application-level errors
//!
//! Every variant is fatal for a validation run. Per-record problems are
//! never errors; they are reported as findings.

use domain::ParseFailureKind;
use thiserror::Error;

/// Errors that abort a validation run
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Database file does not exist
    #[error("Database not found: {0}")]
    NotFound(String),

    /// Database file could not be read
    #[error("Failed to read database: {0}")]
    Io(String),

    /// Database file has zero bytes
    #[error("File size is zero! Database is corrupted: {0}")]
    EmptyFile(String),

    /// Database could not be parsed
    #[error("Cannot parse database ({kind}): {message}")]
    Unparsable {
        /// Recognised cause of the failure
        kind: ParseFailureKind,
        /// Parser message, verbatim
        message: String,
    },

    /// Database parsed but declares no users
    #[error("Database does not contain any users")]
    NoUsers,
}

impl ApplicationError {
    /// Create a parse failure error
    pub fn unparsable(kind: ParseFailureKind, message: impl Into<String>) -> Self {
        Self::Unparsable {
            kind,
            message: message.into(),
        }
    }
}
