//! Rule-table validation over a flat record.

use crate::ErrorMapping;
use crate::FieldValue;
use crate::Record;
use crate::rule::RuleConfig;

/// Validates every field present in `record` against `rules`.
///
/// For each field the configured rules run in declaration order and the
/// first failing rule's message is recorded; later rules for that field
/// are not evaluated. Fields without rules, and rules for fields absent
/// from the record, are ignored. Never fails and never mutates its inputs.
///
/// # Example
///
/// ```
/// use formkit_lib::rule::{RuleConfig, RuleDescriptor, RuleRegistry};
/// use formkit_lib::{Record, validate};
///
/// let registry = RuleRegistry::builtin();
/// let rules = RuleConfig::builder(&registry)
///     .field("email")
///         .rule("required", RuleDescriptor::new("required"))
///         .rule("email-format", RuleDescriptor::new("bad format"))
///     .build()
///     .unwrap();
///
/// let errors = validate(&Record::new().set("email", ""), &rules);
/// assert_eq!(errors.get("email"), Some("required"));
///
/// let errors = validate(&Record::new().set("email", "a@b.com"), &rules);
/// assert!(errors.is_empty());
/// ```
pub fn validate(record: &Record, rules: &RuleConfig) -> ErrorMapping {
    let mut errors = ErrorMapping::new();
    for (field, value) in record.iter() {
        if let Some(message) = validate_field(field, value, rules) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Returns the message of the first rule `value` fails for `field`.
pub fn validate_field(field: &str, value: &FieldValue, rules: &RuleConfig) -> Option<String> {
    let rule = rules.rules_for(field).iter().find(|rule| !rule.check(value))?;
    log::debug!("Field '{}' failed rule '{}'", field, rule.kind());
    Some(rule.message().to_string())
}
