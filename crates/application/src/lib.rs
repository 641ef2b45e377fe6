//! Application layer - Use cases and orchestration
//!
//! Drives record validation over a user database obtained through the
//! [`UserDatabaseSource`] port and assembles the final report.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
