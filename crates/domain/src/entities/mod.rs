//! Domain entities

mod finding;
mod user_record;
mod validation_report;

pub use finding::Finding;
pub use user_record::{
    CARDKEY_KEY, KNOWN_KEYS, PASSWD_KEY, ROLES_KEY, UserDatabase, UserRecord,
};
pub use validation_report::{Notice, Statistics, UserOutcome, ValidationReport};
