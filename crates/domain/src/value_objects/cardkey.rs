//! Cardkey value object
//!
//! A cardkey identifies a hardware token and must be a UUID version 4.
//! Four textual encodings are accepted:
//!
//! - simple: `a1a2a3a4b1b2c1c2d1d2d3d4d5d6d7d8`
//! - hyphenated: `a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8`
//! - urn: `urn:uuid:A1A2A3A4-B1B2-C1C2-D1D2-D3D4D5D6D7D8`
//! - braced: `{a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8}`
//!
//! # Examples
//!
//! ```
//! use domain::Cardkey;
//!
//! let key = Cardkey::parse("{7d444840-9dc0-41fc-8a3c-5e3c4e3a9b2a}").unwrap();
//! assert_eq!(key.to_string(), "7d444840-9dc0-41fc-8a3c-5e3c4e3a9b2a");
//!
//! assert!(!Cardkey::is_valid("not-a-uuid"));
//! ```

use std::fmt;

use uuid::Uuid;

use crate::errors::DomainError;

const URN_PREFIX: &str = "urn:uuid:";
const SIMPLE_LEN: usize = 32;
const REQUIRED_VERSION: usize = 4;

/// A validated UUID v4 cardkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardkey(Uuid);

impl Cardkey {
    /// Parse a cardkey from any of the accepted encodings
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCardkey` if the value is not 32 hex
    /// digits after normalisation or its version nibble is not 4.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let simple = normalize(raw);
        if simple.len() != SIMPLE_LEN {
            return Err(DomainError::InvalidCardkey(format!(
                "expected {SIMPLE_LEN} hex digits, found {}",
                simple.len()
            )));
        }

        let uuid =
            Uuid::try_parse(&simple).map_err(|e| DomainError::InvalidCardkey(e.to_string()))?;

        if uuid.get_version_num() != REQUIRED_VERSION {
            return Err(DomainError::InvalidCardkey(format!(
                "expected UUID version {REQUIRED_VERSION}, found version {}",
                uuid.get_version_num()
            )));
        }

        Ok(Self(uuid))
    }

    /// Check whether a raw value is an acceptable cardkey
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Strip the URN prefix (any case), surrounding braces and every hyphen
fn normalize(raw: &str) -> String {
    let without_urn = match (raw.get(..URN_PREFIX.len()), raw.get(URN_PREFIX.len()..)) {
        (Some(prefix), Some(rest)) if prefix.eq_ignore_ascii_case(URN_PREFIX) => rest,
        _ => raw,
    };
    without_urn
        .trim_matches(|c| c == '{' || c == '}')
        .replace('-', "")
}

impl fmt::Display for Cardkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl TryFrom<&str> for Cardkey {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
