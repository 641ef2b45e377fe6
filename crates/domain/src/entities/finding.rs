//! Findings emitted while validating user records
//!
//! Every finding is a non-fatal warning. Some of them describe entries the
//! access-control server refuses to load; those are flagged by
//! [`Finding::breaks_server_load`].

use std::fmt;

/// One structured warning about a single user record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Finding {
    /// The user entry is not a table at all
    RecordNotTable { user: String },
    /// Field name the server does not know about
    UnknownField { user: String, key: String },
    /// `roles` is present but not an array
    RolesNotArray { user: String },
    /// The same role is listed more than once for one user
    DuplicateRole { user: String, role: String },
    /// `passwd` is present but not a string
    PasswordNotString { user: String },
    /// `passwd` does not carry the hashed-credential marker
    PasswordUnencrypted { user: String },
    /// `passwd` value is already used by an earlier user
    PasswordDuplicate { user: String },
    /// `cardkey` is present but not a string
    CardkeyNotString { user: String },
    /// `cardkey` is not a UUID v4
    CardkeyInvalid { user: String },
    /// `cardkey` value is already used by an earlier user
    CardkeyDuplicate { user: String },
}

impl Finding {
    /// Short code identifying the finding type
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RecordNotTable { .. } => "UDB000",
            Self::UnknownField { .. } => "UDB001",
            Self::RolesNotArray { .. } => "UDB010",
            Self::DuplicateRole { .. } => "UDB011",
            Self::PasswordNotString { .. } => "UDB020",
            Self::PasswordUnencrypted { .. } => "UDB021",
            Self::PasswordDuplicate { .. } => "UDB022",
            Self::CardkeyNotString { .. } => "UDB030",
            Self::CardkeyInvalid { .. } => "UDB031",
            Self::CardkeyDuplicate { .. } => "UDB032",
        }
    }

    /// The user the finding belongs to
    pub fn user(&self) -> &str {
        match self {
            Self::RecordNotTable { user }
            | Self::UnknownField { user, .. }
            | Self::RolesNotArray { user }
            | Self::DuplicateRole { user, .. }
            | Self::PasswordNotString { user }
            | Self::PasswordUnencrypted { user }
            | Self::PasswordDuplicate { user }
            | Self::CardkeyNotString { user }
            | Self::CardkeyInvalid { user }
            | Self::CardkeyDuplicate { user } => user,
        }
    }

    /// Whether the server will refuse to load a database containing this
    pub const fn breaks_server_load(&self) -> bool {
        matches!(
            self,
            Self::RecordNotTable { .. }
                | Self::RolesNotArray { .. }
                | Self::PasswordNotString { .. }
                | Self::CardkeyNotString { .. }
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordNotTable { user } => write!(
                f,
                "Warning: user '{user}' is not defined as table! BFFH will fail to load"
            ),
            Self::UnknownField { user, key } => write!(
                f,
                "Warning: User '{user}' contains unknown key '{key}' (will be ignored by BFFH server)"
            ),
            Self::RolesNotArray { user } => write!(
                f,
                "Warning: roles for user '{user}' are not defined as array! BFFH will fail to load"
            ),
            Self::DuplicateRole { user, role } => {
                write!(f, "Warning: duplicate role '{role}' for user '{user}'")
            },
            Self::PasswordNotString { user } => write!(
                f,
                "Warning: password for user '{user}' is not defined as string! BFFH will fail to load"
            ),
            Self::PasswordUnencrypted { user } => {
                write!(f, "Warning: Password for user '{user}' is not encrypted!")
            },
            Self::PasswordDuplicate { user } => write!(
                f,
                "Warning: password for user '{user}' is already in use by other user(s). That might be insecure"
            ),
            Self::CardkeyNotString { user } => write!(
                f,
                "Warning: cardkey for user '{user}' is not defined as string! BFFH will fail to load"
            ),
            Self::CardkeyInvalid { user } => write!(
                f,
                "Warning: cardkey for user '{user}' contains invalid cardkey (no UUID v4)"
            ),
            Self::CardkeyDuplicate { user } => write!(
                f,
                "Warning: cardkey for user '{user}' is already in use by other user(s). That might be insecure"
            ),
        }
    }
}
