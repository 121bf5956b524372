//! Per-field views over a form.

use crate::FieldValue;

/// Status of a single field.
///
/// A field starts untouched and valid. It becomes touched on its first
/// change, and carries an error whenever the last validation that covered
/// it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStatus<'a> {
    /// The field has been changed since creation or the last reset.
    pub touched: bool,
    /// The active failure message.
    pub error: Option<&'a str>,
}

impl FieldStatus<'_> {
    /// Returns `true` if the field has no active error.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything a field component needs to render one field.
///
/// Bindings are handed to each field explicitly; edits flow back through
/// [`FormState::handle_change`](super::FormState::handle_change) using
/// [`name`](Self::name).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBinding<'a> {
    /// Field name.
    pub name: &'a str,
    /// Current value, if the form holds one.
    pub value: Option<&'a FieldValue>,
    /// Active failure message.
    pub error: Option<&'a str>,
    /// The field has been changed since creation or the last reset.
    pub touched: bool,
}

impl<'a> FieldBinding<'a> {
    /// Returns the value's string form, empty if the form holds no value.
    pub fn text(&self) -> String {
        self.value.map(FieldValue::text).unwrap_or_default()
    }

    /// Returns the status part of the binding.
    pub fn status(&self) -> FieldStatus<'a> {
        FieldStatus {
            touched: self.touched,
            error: self.error,
        }
    }
}
