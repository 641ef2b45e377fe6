//! Credential policy configuration.

use domain::{CredentialPolicy, DEFAULT_HASH_PREFIX};
use serde::{Deserialize, Serialize};

/// Password classification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Prefix that marks a password as already hashed
    #[serde(default = "default_hash_prefix")]
    pub hash_prefix: String,
}

fn default_hash_prefix() -> String {
    DEFAULT_HASH_PREFIX.to_string()
}

impl PolicyConfig {
    /// Build the domain policy from these settings
    #[must_use]
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy::new(self.hash_prefix.clone())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            hash_prefix: default_hash_prefix(),
        }
    }
}
