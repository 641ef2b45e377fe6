//! User database location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where BFFH keeps its user database unless told otherwise
pub const DEFAULT_DATABASE_PATH: &str = "/etc/bffh/users.toml";

/// User database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// File checked when no `--db` argument is given
    #[serde(default = "default_path")]
    pub default_path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            default_path: default_path(),
        }
    }
}
