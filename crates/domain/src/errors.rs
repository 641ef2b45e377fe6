//! Domain-level errors

use std::fmt;

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Cardkey is not a UUID v4 in one of the accepted encodings
    #[error("Invalid cardkey: {0}")]
    InvalidCardkey(String),
}

/// Known causes of a database that cannot be parsed
///
/// The category only changes the diagnostic shown to the operator. Every
/// parse failure aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseFailureKind {
    /// The same user table is declared twice
    DuplicateUser,
    /// A key has no value (e.g. `passwd = `)
    EmptyValue,
    /// A line is not a valid `key = value` mapping
    MalformedKeyValue,
    /// Anything the classifier does not recognise
    Unclassified,
}

impl ParseFailureKind {
    /// Operator-facing explanation, or `None` when the raw parser message
    /// should be shown on its own
    #[must_use]
    pub const fn diagnostic(self) -> Option<&'static str> {
        match self {
            Self::DuplicateUser => Some("found at least one duplicate user"),
            Self::EmptyValue => {
                Some("Some user contains a key without value (e.g. 'passwd = ')")
            },
            Self::MalformedKeyValue => Some("Found an incorrect key/value mapping"),
            Self::Unclassified => None,
        }
    }
}

impl fmt::Display for ParseFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUser => write!(f, "duplicate_user"),
            Self::EmptyValue => write!(f, "empty_value"),
            Self::MalformedKeyValue => write!(f, "malformed_key_value"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}
