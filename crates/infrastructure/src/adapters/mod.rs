//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod parse_failure_classifier;
mod toml_user_database;

pub use parse_failure_classifier::classify_parse_failure;
pub use toml_user_database::TomlUserDatabase;
