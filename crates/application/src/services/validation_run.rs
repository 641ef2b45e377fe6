//! Mutable state of one validation pass
//!
//! A `ValidationRun` is created empty, fed one user at a time by the
//! [`RecordValidator`](super::RecordValidator) and consumed by
//! [`ValidationRun::finish`]. It is never reused.

use std::collections::{BTreeSet, HashSet};

use domain::{FieldValue, Finding, Statistics, UserOutcome, ValidationReport};
use tracing::debug;

/// Accumulator for counters, seen values and per-user findings
#[derive(Debug, Default)]
pub struct ValidationRun {
    statistics: Statistics,
    roles: BTreeSet<String>,
    passwords: HashSet<String>,
    cardkeys: HashSet<String>,
    users: Vec<UserOutcome>,
}

impl ValidationRun {
    /// Start an empty run
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters so far
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }

    /// Record a finding for the user currently being validated
    pub(crate) fn flag(&mut self, outcome: &mut UserOutcome, finding: Finding) {
        debug!(code = finding.code(), user = %outcome.name, "{finding}");
        self.statistics.warnings += 1;
        outcome.findings.push(finding);
    }

    /// Close a user's section and count the user
    pub(crate) fn close(&mut self, outcome: UserOutcome) {
        self.statistics.users += 1;
        self.users.push(outcome);
    }

    /// Add a role, keyed by its literal form, to the global set of distinct roles
    pub(crate) fn add_role(&mut self, role: &str) {
        if !self.roles.contains(role) {
            self.roles.insert(role.to_string());
        }
    }

    /// Remember a password value; returns `true` if it was seen before
    pub(crate) fn remember_password(&mut self, value: &FieldValue) -> bool {
        !self.passwords.insert(value.to_string())
    }

    /// Remember a cardkey value; returns `true` if it was seen before
    pub(crate) fn remember_cardkey(&mut self, value: &FieldValue) -> bool {
        !self.cardkeys.insert(value.to_string())
    }

    /// Finalize the run into a read-only report
    #[must_use]
    pub fn finish(self) -> ValidationReport {
        ValidationReport::new(self.statistics, self.roles, self.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_run_is_empty() {
        let run = ValidationRun::new();
        assert_eq!(*run.statistics(), Statistics::default());
        assert!(run.passwords.is_empty());
        assert!(run.cardkeys.is_empty());
    }

    #[test]
    fn flag_counts_warning_and_keeps_finding() {
        let mut run = ValidationRun::new();
        let mut outcome = UserOutcome::new("alice");
        run.flag(
            &mut outcome,
            Finding::RolesNotArray {
                user: "alice".to_string(),
            },
        );
        run.close(outcome);

        assert_eq!(run.statistics().warnings, 1);
        assert_eq!(run.statistics().users, 1);
        let report = run.finish();
        assert_eq!(report.findings().count(), 1);
    }

    #[test]
    fn remembering_reports_repeats() {
        let mut run = ValidationRun::new();
        let value = FieldValue::from("secret");
        assert!(!run.remember_password(&value));
        assert!(run.remember_password(&value));
        assert!(run.remember_password(&value));
        assert_eq!(run.passwords.len(), 1);
    }

    #[test]
    fn passwords_and_cardkeys_are_tracked_separately() {
        let mut run = ValidationRun::new();
        let value = FieldValue::from("same");
        assert!(!run.remember_password(&value));
        assert!(!run.remember_cardkey(&value));
    }

    #[test]
    fn roles_are_deduplicated() {
        let mut run = ValidationRun::new();
        run.add_role("admin");
        run.add_role("member");
        run.add_role("admin");
        assert_eq!(run.finish().unique_roles(), 2);
    }
}
