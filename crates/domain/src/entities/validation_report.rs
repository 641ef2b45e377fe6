//! Validation report
//!
//! The report is produced by a single pass over the database and is
//! read-only afterwards. Counters live in [`Statistics`]; the operator-facing
//! summary lines are derived from them by [`ValidationReport::notices`].

use std::collections::BTreeSet;
use std::fmt;

use super::finding::Finding;

/// Counters accumulated over one validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// User records visited
    pub users: usize,
    /// Users with a `passwd` field
    pub passwords: usize,
    /// Passwords carrying the hashed-credential marker
    pub passwords_encrypted: usize,
    /// String passwords without the marker
    pub passwords_unencrypted: usize,
    /// Passwords whose value an earlier user already uses
    pub passwords_duplicate: usize,
    /// Users with a `cardkey` field
    pub cardkeys: usize,
    /// Cardkeys that are not a UUID v4
    pub cardkeys_invalid: usize,
    /// Cardkeys whose value an earlier user already uses
    pub cardkeys_duplicate: usize,
    /// Users with no `roles`, or an empty list
    pub users_without_roles: usize,
    /// Users listing at least one role twice
    pub users_with_duplicate_roles: usize,
    /// Occurrences of unrecognised field names
    pub unknown_fields: usize,
    /// Users having neither `passwd` nor `cardkey`
    pub users_without_credentials: usize,
    /// Total number of findings
    pub warnings: usize,
}

/// Findings for one user, in the order they were detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOutcome {
    /// User name
    pub name: String,
    /// Findings for this user
    pub findings: Vec<Finding>,
}

impl UserOutcome {
    /// Create an outcome with no findings yet
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            findings: Vec::new(),
        }
    }

    /// Check if the user passed every check
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Summary line shown when a counter is nonzero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Unknown field occurrences
    UnknownKeys(usize),
    /// Users that cannot do anything as a client
    UsersWithoutRoles(usize),
    /// Users listing a role more than once
    UsersWithDuplicateRoles(usize),
    /// Not a single role anywhere in the database
    NoRolesAtAll,
    /// Cardkeys that cannot authenticate
    InvalidCardkeys(usize),
    /// Users that cannot log in at all
    UsersWithoutCredentials(usize),
    /// Total warnings
    Warnings(usize),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeys(n) => write!(f, "{n} unknown keys (will be ignored by BFFH server)"),
            Self::UsersWithoutRoles(n) => write!(
                f,
                "{n} users without any roles. They won't be able to do something as client!"
            ),
            Self::UsersWithDuplicateRoles(n) => {
                write!(f, "{n} users with duplicate roles. Please clean up!")
            },
            Self::NoRolesAtAll => write!(
                f,
                "Globally, there are no roles assigned for any user. They won't be able to do something as client!"
            ),
            Self::InvalidCardkeys(n) => write!(
                f,
                "{n} invalid cardkeys in your database. They won't be able to authenticate at BFFH server by keycard!"
            ),
            Self::UsersWithoutCredentials(n) => write!(
                f,
                "{n} users without both: password and cardkey. They won't be able to login anyhow!"
            ),
            Self::Warnings(n) => write!(
                f,
                "{n} warnings in total. You might need to optimize your user database!"
            ),
        }
    }
}

/// Final result of validating a user database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    statistics: Statistics,
    roles: BTreeSet<String>,
    users: Vec<UserOutcome>,
}

impl ValidationReport {
    /// Assemble a finished report
    #[must_use]
    pub const fn new(
        statistics: Statistics,
        roles: BTreeSet<String>,
        users: Vec<UserOutcome>,
    ) -> Self {
        Self {
            statistics,
            roles,
            users,
        }
    }

    /// All counters
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Every distinct role seen across the database, in TOML literal form
    pub const fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    /// Number of distinct roles
    pub fn unique_roles(&self) -> usize {
        self.roles.len()
    }

    /// Per-user outcomes in document order
    pub fn users(&self) -> &[UserOutcome] {
        &self.users
    }

    /// All findings in document order
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.users.iter().flat_map(|u| u.findings.iter())
    }

    /// Check whether the database passed without any warning
    pub const fn is_clean(&self) -> bool {
        self.statistics.warnings == 0
    }

    /// Summary lines, one per nonzero condition, in display order
    pub fn notices(&self) -> Vec<Notice> {
        let s = &self.statistics;
        let mut notices = Vec::new();

        if s.unknown_fields > 0 {
            notices.push(Notice::UnknownKeys(s.unknown_fields));
        }
        if s.users_without_roles > 0 {
            notices.push(Notice::UsersWithoutRoles(s.users_without_roles));
        }
        if s.users_with_duplicate_roles > 0 {
            notices.push(Notice::UsersWithDuplicateRoles(s.users_with_duplicate_roles));
        }
        if self.roles.is_empty() {
            notices.push(Notice::NoRolesAtAll);
        }
        if s.cardkeys_invalid > 0 {
            notices.push(Notice::InvalidCardkeys(s.cardkeys_invalid));
        }
        if s.users_without_credentials > 0 {
            notices.push(Notice::UsersWithoutCredentials(s.users_without_credentials));
        }
        if s.warnings > 0 {
            notices.push(Notice::Warnings(s.warnings));
        }

        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn clean_report_only_has_no_notices() {
        let stats = Statistics {
            users: 1,
            passwords: 1,
            passwords_encrypted: 1,
            ..Statistics::default()
        };
        let report = ValidationReport::new(stats, roles(&["admin"]), vec![UserOutcome::new("a")]);

        assert!(report.is_clean());
        assert!(report.notices().is_empty());
        assert_eq!(report.unique_roles(), 1);
    }

    #[test]
    fn empty_role_set_is_always_noticed() {
        let stats = Statistics {
            users: 1,
            ..Statistics::default()
        };
        let report = ValidationReport::new(stats, BTreeSet::new(), Vec::new());
        assert_eq!(report.notices(), vec![Notice::NoRolesAtAll]);
    }

    #[test]
    fn notices_follow_display_order() {
        let stats = Statistics {
            users: 3,
            unknown_fields: 2,
            users_without_roles: 1,
            users_with_duplicate_roles: 1,
            cardkeys_invalid: 1,
            users_without_credentials: 1,
            warnings: 4,
            ..Statistics::default()
        };
        let report = ValidationReport::new(stats, roles(&["x"]), Vec::new());

        assert_eq!(
            report.notices(),
            vec![
                Notice::UnknownKeys(2),
                Notice::UsersWithoutRoles(1),
                Notice::UsersWithDuplicateRoles(1),
                Notice::InvalidCardkeys(1),
                Notice::UsersWithoutCredentials(1),
                Notice::Warnings(4),
            ]
        );
    }

    #[test]
    fn findings_are_flattened_in_order() {
        let mut a = UserOutcome::new("a");
        a.findings.push(Finding::RolesNotArray {
            user: "a".to_string(),
        });
        let b = UserOutcome::new("b");
        let mut c = UserOutcome::new("c");
        c.findings.push(Finding::CardkeyInvalid {
            user: "c".to_string(),
        });

        let report = ValidationReport::new(Statistics::default(), BTreeSet::new(), vec![a, b, c]);
        let users: Vec<_> = report.findings().map(Finding::user).collect();
        assert_eq!(users, vec!["a", "c"]);
        assert!(report.users()[1].is_clean());
    }

    #[test]
    fn notice_messages() {
        assert_eq!(
            Notice::UnknownKeys(3).to_string(),
            "3 unknown keys (will be ignored by BFFH server)"
        );
        assert_eq!(
            Notice::Warnings(7).to_string(),
            "7 warnings in total. You might need to optimize your user database!"
        );
    }
}
