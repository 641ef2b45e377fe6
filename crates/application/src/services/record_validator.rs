//! Per-record validation
//!
//! Inspects one user record in isolation, classifies each of its fields and
//! feeds findings and counters into the current [`ValidationRun`].

use std::collections::HashSet;

use domain::{
    CARDKEY_KEY, Cardkey, CredentialPolicy, Finding, PASSWD_KEY, ROLES_KEY, UserOutcome,
    UserRecord,
};
use tracing::trace;

use super::validation_run::ValidationRun;

/// Validates single user records
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    policy: CredentialPolicy,
}

impl RecordValidator {
    /// Create a validator with a password classification policy
    #[must_use]
    pub const fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }

    /// The password classification policy in use
    pub const fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Validate one record and add the results to `run`
    pub fn validate(&self, record: &UserRecord, run: &mut ValidationRun) {
        trace!(user = record.name(), "Validating user record");
        let mut outcome = UserOutcome::new(record.name());

        if record.fields().is_none() {
            run.flag(
                &mut outcome,
                Finding::RecordNotTable {
                    user: record.name().to_string(),
                },
            );
        }

        Self::check_unknown_fields(record, &mut outcome, run);
        Self::check_roles(record, &mut outcome, run);
        self.check_password(record, &mut outcome, run);
        Self::check_cardkey(record, &mut outcome, run);

        if !record.has_field(PASSWD_KEY) && !record.has_field(CARDKEY_KEY) {
            run.statistics_mut().users_without_credentials += 1;
        }

        run.close(outcome);
    }

    fn check_unknown_fields(
        record: &UserRecord,
        outcome: &mut UserOutcome,
        run: &mut ValidationRun,
    ) {
        for key in record.unknown_keys() {
            run.statistics_mut().unknown_fields += 1;
            run.flag(
                outcome,
                Finding::UnknownField {
                    user: record.name().to_string(),
                    key: key.to_string(),
                },
            );
        }
    }

    fn check_roles(record: &UserRecord, outcome: &mut UserOutcome, run: &mut ValidationRun) {
        let Some(value) = record.field(ROLES_KEY) else {
            run.statistics_mut().users_without_roles += 1;
            return;
        };

        let Some(roles) = value.as_array() else {
            run.flag(
                outcome,
                Finding::RolesNotArray {
                    user: record.name().to_string(),
                },
            );
            return;
        };

        if roles.is_empty() {
            run.statistics_mut().users_without_roles += 1;
        }

        // Roles are keyed by their literal form, so "1" and 1 are different roles
        let mut seen = HashSet::new();
        let mut has_duplicates = false;
        for role in roles {
            let key = role.to_string();
            if seen.contains(&key) {
                has_duplicates = true;
                run.flag(
                    outcome,
                    Finding::DuplicateRole {
                        user: record.name().to_string(),
                        role: role.label(),
                    },
                );
            } else {
                run.add_role(&key);
                seen.insert(key);
            }
        }

        if has_duplicates {
            run.statistics_mut().users_with_duplicate_roles += 1;
        }
    }

    fn check_password(
        &self,
        record: &UserRecord,
        outcome: &mut UserOutcome,
        run: &mut ValidationRun,
    ) {
        let Some(value) = record.field(PASSWD_KEY) else {
            return;
        };
        let user = || record.name().to_string();

        run.statistics_mut().passwords += 1;
        match value.as_str() {
            None => run.flag(outcome, Finding::PasswordNotString { user: user() }),
            Some(password) if self.policy.is_hashed(password) => {
                run.statistics_mut().passwords_encrypted += 1;
            },
            Some(_) => {
                run.statistics_mut().passwords_unencrypted += 1;
                run.flag(outcome, Finding::PasswordUnencrypted { user: user() });
            },
        }

        if run.remember_password(value) {
            run.statistics_mut().passwords_duplicate += 1;
            run.flag(outcome, Finding::PasswordDuplicate { user: user() });
        }
    }

    fn check_cardkey(record: &UserRecord, outcome: &mut UserOutcome, run: &mut ValidationRun) {
        let Some(value) = record.field(CARDKEY_KEY) else {
            return;
        };
        let user = || record.name().to_string();

        run.statistics_mut().cardkeys += 1;
        match value.as_str() {
            None => run.flag(outcome, Finding::CardkeyNotString { user: user() }),
            Some(raw) if !Cardkey::is_valid(raw) => {
                run.statistics_mut().cardkeys_invalid += 1;
                run.flag(outcome, Finding::CardkeyInvalid { user: user() });
            },
            Some(_) => {},
        }

        if run.remember_cardkey(value) {
            run.statistics_mut().cardkeys_duplicate += 1;
            run.flag(outcome, Finding::CardkeyDuplicate { user: user() });
        }
    }
}
