//! Form-state controller.

use std::collections::BTreeSet;

use crate::ErrorMapping;
use crate::FieldValue;
use crate::FormConfig;
use crate::Record;
use crate::rule::RuleConfig;
use crate::validator;

use super::ChangeEvent;
use super::FieldBinding;
use super::FieldStatus;

/// Current values and errors of one form.
///
/// Created once per form with an initial snapshot. Every field edit goes
/// through [`handle_change`](Self::handle_change), which clears all shown
/// errors and, when validate-on-change is enabled, re-validates only the
/// edited field.
///
/// `errors` only ever holds fields present in `values`.
///
/// # Example
///
/// ```
/// use formkit_lib::form::FormState;
/// use formkit_lib::rule::{RuleConfig, RuleDescriptor, RuleRegistry};
/// use formkit_lib::Record;
///
/// let registry = RuleRegistry::builtin();
/// let rules = RuleConfig::builder(&registry)
///     .field("email")
///         .rule("required", RuleDescriptor::new("required"))
///     .build()
///     .unwrap();
///
/// let mut form = FormState::new(Record::new().set("email", "a@b.com"), true, rules);
/// form.handle_change("email", "");
/// assert_eq!(form.errors().get("email"), Some("required"));
///
/// form.reset();
/// assert!(form.errors().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
    values: Record,
    errors: ErrorMapping,
    initial_values: Record,
    rules: RuleConfig,
    validate_on_change: bool,
    touched: BTreeSet<String>,
    form_error: Option<String>,
}

impl FormState {
    /// Creates a form from an initial snapshot.
    pub fn new(initial_values: Record, validate_on_change: bool, rules: RuleConfig) -> Self {
        Self {
            values: initial_values.clone(),
            errors: ErrorMapping::new(),
            initial_values,
            rules,
            validate_on_change,
            touched: BTreeSet::new(),
            form_error: None,
        }
    }

    /// Creates a form from a [`FormConfig`].
    pub fn from_config(config: FormConfig) -> Self {
        Self::new(config.initial_values, config.validate_on_change, config.rules)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the current values.
    pub fn values(&self) -> &Record {
        &self.values
    }

    /// Returns the current errors.
    pub fn errors(&self) -> &ErrorMapping {
        &self.errors
    }

    /// Returns the snapshot the form resets to.
    pub fn initial_values(&self) -> &Record {
        &self.initial_values
    }

    /// Returns the rule configuration.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Returns `true` if fields are re-validated on change.
    pub fn validates_on_change(&self) -> bool {
        self.validate_on_change
    }

    /// Returns the form-level error, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Sets a form-level error, e.g. a failed submission.
    ///
    /// Cleared by the next change or reset.
    pub fn set_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }

    /// Returns `true` if no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the names of touched fields in name order.
    pub fn touched(&self) -> impl Iterator<Item = &str> {
        self.touched.iter().map(String::as_str)
    }

    /// Returns the status of a field.
    pub fn status(&self, field: &str) -> FieldStatus<'_> {
        FieldStatus {
            touched: self.touched.contains(field),
            error: self.errors.get(field),
        }
    }

    /// Returns the binding for a field.
    pub fn field<'a>(&'a self, name: &'a str) -> FieldBinding<'a> {
        FieldBinding {
            name,
            value: self.values.get(name),
            error: self.errors.get(name),
            touched: self.touched.contains(name),
        }
    }

    /// Returns bindings for every field holding a value, in value order.
    pub fn fields(&self) -> Vec<FieldBinding<'_>> {
        self.values.names().map(|name| self.field(name)).collect()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Applies a field edit.
    ///
    /// Merges the value, clears the form-level error and every field error,
    /// then re-validates the edited field if validate-on-change is enabled.
    pub fn handle_change(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();

        self.form_error = None;
        self.errors.clear();

        if self.validate_on_change {
            if let Some(message) = validator::validate_field(&name, &value, &self.rules) {
                self.errors.insert(name.as_str(), message);
            }
        }

        if self.touched.insert(name.clone()) {
            log::debug!("Field '{}' touched", name);
        }
        self.values.insert(name, value);
    }

    /// Applies a [`ChangeEvent`].
    pub fn handle_event(&mut self, event: ChangeEvent) {
        self.handle_change(event.name, event.value);
    }

    /// Validates `record` against the full rule configuration and stores
    /// the result as the current errors.
    ///
    /// Failures for fields the form holds no value for are not stored.
    /// Returns `true` if the stored mapping is empty.
    pub fn validate(&mut self, record: &Record) -> bool {
        let mut errors = validator::validate(record, &self.rules);
        errors.retain(|field| {
            let known = self.values.contains(field);
            if !known {
                log::debug!("Dropping error for unknown field '{}'", field);
            }
            known
        });
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validates all current values. Returns `true` if the form is valid.
    pub fn validate_all(&mut self) -> bool {
        self.errors = validator::validate(&self.values, &self.rules);
        self.errors.is_empty()
    }

    /// Restores the initial snapshot and clears errors and touched state.
    pub fn reset(&mut self) {
        log::debug!("Resetting form");
        self.values = self.initial_values.clone();
        self.errors.clear();
        self.touched.clear();
        self.form_error = None;
    }
}
