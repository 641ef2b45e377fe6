//! TOML user database adapter
//!
//! Reads a `users.toml` file, parses it in document order and converts the
//! parsed values into parser-neutral domain records.

use std::fs;
use std::io;
use std::path::PathBuf;

use application::{ApplicationError, UserDatabaseSource};
use domain::{FieldValue, UserDatabase, UserRecord};
use tracing::{debug, instrument, warn};

use super::parse_failure_classifier::classify_parse_failure;

/// User database stored as a TOML file
#[derive(Debug, Clone)]
pub struct TomlUserDatabase {
    path: PathBuf,
}

impl TomlUserDatabase {
    /// Create an adapter for the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML text into user records
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Unparsable` with the classified cause and
    /// the parser's message.
    pub fn parse(content: &str) -> Result<UserDatabase, ApplicationError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| {
            let message = e.to_string();
            let kind = classify_parse_failure(&message);
            warn!(%kind, "Failed to parse user database");
            ApplicationError::unparsable(kind, message.trim_end())
        })?;

        Ok(table
            .into_iter()
            .map(|(name, value)| UserRecord::new(name, convert(value)))
            .collect())
    }

    fn io_error(&self, error: &io::Error) -> ApplicationError {
        if error.kind() == io::ErrorKind::NotFound {
            ApplicationError::NotFound(self.location())
        } else {
            ApplicationError::Io(format!("{}: {error}", self.path.display()))
        }
    }
}

impl UserDatabaseSource for TomlUserDatabase {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn size_bytes(&self) -> Result<u64, ApplicationError> {
        let metadata = fs::metadata(&self.path).map_err(|e| self.io_error(&e))?;
        Ok(metadata.len())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<UserDatabase, ApplicationError> {
        let bytes = fs::read(&self.path).map_err(|e| self.io_error(&e))?;
        let content = std::str::from_utf8(&bytes).map_err(|e| {
            ApplicationError::unparsable(domain::ParseFailureKind::Unclassified, e.to_string())
        })?;

        let database = Self::parse(content)?;
        debug!(users = database.len(), "Parsed user database");
        Ok(database)
    }
}

fn convert(value: toml::Value) -> FieldValue {
    match value {
        toml::Value::String(s) => FieldValue::String(s),
        toml::Value::Integer(i) => FieldValue::Integer(i),
        toml::Value::Float(f) => FieldValue::Float(f),
        toml::Value::Boolean(b) => FieldValue::Boolean(b),
        toml::Value::Datetime(d) => FieldValue::Datetime(d.to_string()),
        toml::Value::Array(items) => FieldValue::Array(items.into_iter().map(convert).collect()),
        toml::Value::Table(table) => FieldValue::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect(),
        ),
    }
}
