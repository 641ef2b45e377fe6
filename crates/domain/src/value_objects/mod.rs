//! Value Objects - Immutable, identity-less domain primitives

mod cardkey;
mod credential_policy;
mod field_value;

pub use cardkey::Cardkey;
pub use credential_policy::{CredentialPolicy, DEFAULT_HASH_PREFIX};
pub use field_value::FieldValue;
