//! Validation engine
//!
//! Orchestrates one validation pass: checks the document-level
//! preconditions, drives the [`RecordValidator`] over every user in document
//! order and returns the finished [`ValidationReport`].

use domain::{CredentialPolicy, UserDatabase, ValidationReport};
use tracing::{debug, info, instrument};

use super::record_validator::RecordValidator;
use super::validation_run::ValidationRun;
use crate::error::ApplicationError;
use crate::ports::UserDatabaseSource;

/// Runs a full validation pass over a user database
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    validator: RecordValidator,
}

impl ValidationEngine {
    /// Create an engine with a password classification policy
    #[must_use]
    pub const fn new(policy: CredentialPolicy) -> Self {
        Self {
            validator: RecordValidator::new(policy),
        }
    }

    /// Load the database from `source` and validate it
    ///
    /// `size` is the raw input length the caller already obtained from
    /// [`UserDatabaseSource::size_bytes`]; the source is not asked again.
    ///
    /// # Errors
    ///
    /// Fails without a report if the input is empty, cannot be read or
    /// parsed, or declares no users.
    #[instrument(skip(self, source), fields(location = %source.location()))]
    pub fn run(
        &self,
        source: &dyn UserDatabaseSource,
        size: u64,
    ) -> Result<ValidationReport, ApplicationError> {
        if size == 0 {
            return Err(ApplicationError::EmptyFile(source.location()));
        }
        debug!(size, "Loading user database");

        let database = source.load()?;
        self.validate(&database)
    }

    /// Validate an already parsed database
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoUsers` if the database is empty.
    pub fn validate(
        &self,
        database: &UserDatabase,
    ) -> Result<ValidationReport, ApplicationError> {
        if database.is_empty() {
            return Err(ApplicationError::NoUsers);
        }

        let mut run = ValidationRun::new();
        for record in database {
            self.validator.validate(record, &mut run);
        }

        let report = run.finish();
        info!(
            users = report.statistics().users,
            unique_roles = report.unique_roles(),
            warnings = report.statistics().warnings,
            "User database validated"
        );
        Ok(report)
    }
}
