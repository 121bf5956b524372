//! Flat record of field values

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::FieldValue;

/// A flat record of form field values keyed by field name.
///
/// There is no nesting and no cross-field relationship; each field is
/// validated on its own. Fields keep their insertion order, and replacing
/// a value keeps the field's position.
///
/// # Example
///
/// ```
/// use formkit_lib::Record;
///
/// let record = Record::new()
///     .set("email", "a@b.com")
///     .set("age", 42);
///
/// assert_eq!(record.get("email").and_then(|v| v.as_str()), Some("a@b.com"));
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, returning the record for chaining.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value, returning the previous value if any.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns `true` if the field exists.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Shallow-merges `other` into this record. Fields in `other` win.
    pub fn merge(&mut self, other: Record) {
        self.fields.extend(other.fields);
    }

    /// Returns a record holding only `field`, or an empty record if absent.
    pub fn only(&self, field: &str) -> Record {
        let mut record = Record::new();
        if let Some(value) = self.fields.get(field) {
            record.insert(field, value.clone());
        }
        record
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
