//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod user_database_source;

#[cfg(test)]
pub use user_database_source::MockUserDatabaseSource;
pub use user_database_source::UserDatabaseSource;
