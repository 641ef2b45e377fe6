//! Parser-neutral field values
//!
//! The database adapter converts whatever document model it parses into
//! `FieldValue` so that validation never depends on a particular parser.

use std::fmt;

/// Value of a single key in a user record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text
    String(String),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Boolean(bool),
    /// Date/time literal, kept in its textual form
    Datetime(String),
    /// Ordered sequence
    Array(Vec<FieldValue>),
    /// Nested key/value mapping in document order
    Table(Vec<(String, FieldValue)>),
}

impl FieldValue {
    /// Short name of the value's type, as used in diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Datetime(_) => "datetime",
            Self::Array(_) => "array",
            Self::Table(_) => "table",
        }
    }

    /// Borrow the text if this is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements if this is an array
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries if this is a table
    #[must_use]
    pub fn as_table(&self) -> Option<&[(String, Self)]> {
        match self {
            Self::Table(entries) => Some(entries),
            _ => None,
        }
    }

    /// Human label: strings verbatim, everything else as a literal
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().map_or_else(|| self.to_string(), str::to_owned)
    }
}

/// Renders a TOML-like literal. Two values render identically only if they
/// have the same type and content, which makes the output usable as an
/// identity key for duplicate detection.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Datetime(d) => write!(f, "{d}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Table(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key:?} = {value}")?;
                }
                write!(f, " }}")
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(FieldValue::from("x").kind(), "string");
        assert_eq!(FieldValue::from(1_i64).kind(), "integer");
        assert_eq!(FieldValue::Float(1.5).kind(), "float");
        assert_eq!(FieldValue::from(true).kind(), "boolean");
        assert_eq!(FieldValue::from(vec!["a"]).kind(), "array");
        assert_eq!(FieldValue::Table(Vec::new()).kind(), "table");
    }

    #[test]
    fn accessors_match_variant() {
        let s = FieldValue::from("abc");
        assert_eq!(s.as_str(), Some("abc"));
        assert!(s.as_array().is_none());

        let a = FieldValue::from(vec!["a", "b"]);
        assert_eq!(a.as_array().map(<[FieldValue]>::len), Some(2));
        assert!(a.as_str().is_none());
    }

    #[test]
    fn label_is_verbatim_for_strings() {
        assert_eq!(FieldValue::from("admin").label(), "admin");
        assert_eq!(FieldValue::from(42_i64).label(), "42");
    }

    #[test]
    fn string_and_number_render_differently() {
        assert_ne!(
            FieldValue::from("1234").to_string(),
            FieldValue::from(1234_i64).to_string()
        );
    }

    #[test]
    fn nested_values_render() {
        let value = FieldValue::Table(vec![
            ("a".to_string(), FieldValue::from(vec![1_i64, 2])),
            ("b".to_string(), FieldValue::from(false)),
        ]);
        assert_eq!(value.to_string(), r#"{ "a" = [1, 2], "b" = false }"#);
    }
}
