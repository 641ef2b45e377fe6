//! User records and the parsed user database

use crate::value_objects::FieldValue;

/// Field holding the ordered list of role names
pub const ROLES_KEY: &str = "roles";
/// Field holding the (ideally hashed) password
pub const PASSWD_KEY: &str = "passwd";
/// Field holding the hardware token UUID
pub const CARDKEY_KEY: &str = "cardkey";

/// Every field name the access-control server understands
pub const KNOWN_KEYS: [&str; 3] = [ROLES_KEY, PASSWD_KEY, CARDKEY_KEY];

/// One named entry in the user database
///
/// The value is normally a table. Anything else is kept as-is so that the
/// validator can report it instead of the loader rejecting the file.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    name: String,
    value: FieldValue,
}

impl UserRecord {
    /// Create a record from a name and its raw value
    #[must_use]
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Create a table-shaped record from its fields
    #[must_use]
    pub fn with_fields<K, V>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(name, FieldValue::Table(fields))
    }

    /// The user name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in document order, or `None` if the record is not a table
    pub fn fields(&self) -> Option<&[(String, FieldValue)]> {
        self.value.as_table()
    }

    /// Look up a single field
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields()?
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Check whether a field is present, whatever its value
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Field names not in [`KNOWN_KEYS`], in document order
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.fields()
            .unwrap_or_default()
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| !KNOWN_KEYS.contains(k))
    }
}

/// The whole parsed database: user records in document order
///
/// User names are unique; the parser rejects documents that declare a user
/// twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDatabase {
    users: Vec<UserRecord>,
}

impl UserDatabase {
    /// Create a database from records in document order
    #[must_use]
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Number of user records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the database has no users at all
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate users in document order
    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.users.iter()
    }
}

impl FromIterator<UserRecord> for UserDatabase {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a UserDatabase {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
