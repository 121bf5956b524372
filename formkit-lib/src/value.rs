//! FieldValue enum for form field contents

use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The value held by a single form field.
///
/// Fields are flat: a value is a scalar or an array of values, never a
/// nested record. The untagged representation maps plain JSON straight
/// onto the variants, and integral numbers serialize back as integers.
///
/// # Example
///
/// ```
/// use formkit_lib::FieldValue;
///
/// let email = FieldValue::from("a@b.com");
/// let age = FieldValue::from(42);
/// let terms = FieldValue::from(true);
/// let tags = FieldValue::from(vec!["rust", "forms"]);
///
/// assert_eq!(age.text(), "42");
/// assert_eq!(tags.text(), "rust,forms");
/// assert_eq!(serde_json::to_string(&age).unwrap(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value (a cleared field). Behaves like empty text.
    Null,
    /// Boolean value (checkboxes, toggles).
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    String(String),
    /// Multiple values (multi-selects, tag lists).
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns the string form of this value.
    ///
    /// Null is empty, integral numbers render without a fractional part
    /// and arrays render as the comma-joined text of their elements.
    pub fn text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::String(s) => s.clone(),
            FieldValue::Array(items) => items
                .iter()
                .map(FieldValue::text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Returns the length used by length rules.
    ///
    /// Characters for strings, elements for arrays. Null, numbers and
    /// booleans have no length.
    pub fn length(&self) -> Option<usize> {
        match self {
            FieldValue::String(s) => Some(s.chars().count()),
            FieldValue::Array(items) => Some(items.len()),
            FieldValue::Null | FieldValue::Bool(_) | FieldValue::Number(_) => None,
        }
    }

    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the string slice if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Array(items) => items.serialize(serializer),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::String(String::new())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Number(f64::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Number(f64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(v: Vec<T>) -> Self {
        FieldValue::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_forms() {
        assert_eq!(FieldValue::from(false).text(), "false");
        assert_eq!(FieldValue::from(8).text(), "8");
        assert_eq!(FieldValue::from(2.5).text(), "2.5");
        assert_eq!(FieldValue::from(Vec::<String>::new()).text(), "");
        assert_eq!(FieldValue::from(vec![1, 2]).text(), "1,2");
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(FieldValue::from("héllo").length(), Some(5));
        assert_eq!(FieldValue::from(vec!["a", "b"]).length(), Some(2));
        assert_eq!(FieldValue::from(12345).length(), None);
        assert_eq!(FieldValue::from(true).length(), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[null, true, 3, "x", ["a", 1]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Null,
                FieldValue::Bool(true),
                FieldValue::Number(3.0),
                FieldValue::String("x".into()),
                FieldValue::Array(vec!["a".into(), 1.into()]),
            ]
        );
    }

    #[test]
    fn test_serialize_keeps_integers() {
        let values = vec![
            FieldValue::from(8),
            FieldValue::from(-3),
            FieldValue::from(2.5),
            FieldValue::Null,
            FieldValue::from(vec![1, 2]),
        ];
        assert_eq!(serde_json::to_string(&values).unwrap(), "[8,-3,2.5,null,[1,2]]");
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(FieldValue::Null.text(), "");
        assert_eq!(FieldValue::Null.length(), None);
        assert!(FieldValue::Null.is_null());
    }
}
