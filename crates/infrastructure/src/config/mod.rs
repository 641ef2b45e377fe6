//! Application configuration
//!
//! Split into focused sub-modules:
//! - `database`: where to look for the user database
//! - `policy`: how passwords are classified
//!
//! Sources, later ones overriding earlier ones: built-in defaults, an
//! optional `userdb-check.toml` in the working directory (or an explicit
//! file), and `USERDB_CHECK_*` environment variables using `__` between
//! nested keys (e.g. `USERDB_CHECK_DATABASE__DEFAULT_PATH`).

mod database;
mod policy;

use std::path::Path;

use domain::DEFAULT_HASH_PREFIX;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use database::{DEFAULT_DATABASE_PATH, DatabaseConfig};
pub use policy::PolicyConfig;

/// Prefix of environment variables read by [`AppConfig::load_from`]
pub const ENV_PREFIX: &str = "USERDB_CHECK";

/// Name of the optional configuration file, without extension
const CONFIG_FILE_NAME: &str = "userdb-check";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// User database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Password classification settings
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl AppConfig {
    /// Load configuration from defaults, a file and the environment
    ///
    /// Without `file` the optional `userdb-check.toml` in the working
    /// directory is read. An explicitly named file must exist.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("database.default_path", DEFAULT_DATABASE_PATH)?
            .set_default("policy.hash_prefix", DEFAULT_HASH_PREFIX)?;

        let builder = match file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)),
        };

        let config = builder
            // Override with environment variables (e.g., USERDB_CHECK_POLICY__HASH_PREFIX)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(
            default_path = %loaded.database.default_path.display(),
            hash_prefix = %loaded.policy.hash_prefix,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
