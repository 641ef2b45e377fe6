//! Infrastructure layer - Adapters for external systems
//!
//! Implements the user database port on top of TOML files, and provides
//! configuration loading and logging setup for the binary.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{TomlUserDatabase, classify_parse_failure};
pub use config::{AppConfig, DEFAULT_DATABASE_PATH, DatabaseConfig, PolicyConfig};
pub use telemetry::{TelemetryError, init_logging};
