//! Password classification policy

/// Prefix of a PHC string produced by Argon2
pub const DEFAULT_HASH_PREFIX: &str = "$argon2";

/// Decides whether a stored password looks hashed or plaintext
///
/// Only the marker prefix is inspected. The hash itself is never verified.
///
/// # Examples
///
/// ```
/// use domain::CredentialPolicy;
///
/// let policy = CredentialPolicy::default();
/// assert!(policy.is_hashed("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"));
/// assert!(!policy.is_hashed("hunter2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    hash_prefix: String,
}

impl CredentialPolicy {
    /// Create a policy with a custom hashed-credential marker
    #[must_use]
    pub fn new(hash_prefix: impl Into<String>) -> Self {
        Self {
            hash_prefix: hash_prefix.into(),
        }
    }

    /// The marker prefix
    pub fn hash_prefix(&self) -> &str {
        &self.hash_prefix
    }

    /// Check if a password value carries the hashed-credential marker
    pub fn is_hashed(&self, password: &str) -> bool {
        password.starts_with(&self.hash_prefix)
    }
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_PREFIX)
    }
}
