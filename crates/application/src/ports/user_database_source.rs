//! User database source port
//!
//! Defines how the engine obtains the raw size and the parsed content of a
//! user database.

use domain::UserDatabase;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for reading a user database
#[cfg_attr(test, automock)]
pub trait UserDatabaseSource: Send + Sync {
    /// Human-readable location, used in diagnostics
    fn location(&self) -> String;

    /// Size of the raw input in bytes
    fn size_bytes(&self) -> Result<u64, ApplicationError>;

    /// Parse the input into user records in document order
    ///
    /// Returns `ApplicationError::Unparsable` when the document is malformed.
    fn load(&self) -> Result<UserDatabase, ApplicationError>;
}
