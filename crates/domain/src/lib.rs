//! Domain layer for the BFFH user database checker
//!
//! Contains the user records, credential value objects, findings and the
//! validation report. This layer knows nothing about files or TOML.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, ParseFailureKind};
pub use value_objects::*;
