//! Field-level change events.

use serde::Deserialize;
use serde::Serialize;

use crate::FieldValue;

/// A field edit in the standard `{name, value}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Name of the edited field.
    pub name: String,
    /// The field's new value.
    pub value: FieldValue,
}

impl ChangeEvent {
    /// Creates a new change event.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
