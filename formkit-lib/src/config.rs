//! Form configuration

use std::path::Path;

use serde::Deserialize;

use crate::Record;
use crate::error::ConfigError;
use crate::rule::ConfigMode;
use crate::rule::RuleConfig;
use crate::rule::RuleRegistry;

/// Everything a [`FormState`](crate::form::FormState) is created from.
///
/// # Example
///
/// ```
/// use formkit_lib::FormConfig;
/// use formkit_lib::rule::{ConfigMode, RuleRegistry};
///
/// let config = FormConfig::from_json_str(
///     r#"{
///         "initial_values": { "email": "" },
///         "validate_on_change": true,
///         "rules": { "email": { "required": { "message": "required" } } }
///     }"#,
///     &RuleRegistry::builtin(),
///     ConfigMode::Strict,
/// )
/// .unwrap();
///
/// assert!(config.validate_on_change);
/// assert_eq!(config.rules.rule_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormConfig {
    /// Snapshot the form starts from and resets to.
    ///
    /// Default: empty
    pub initial_values: Record,

    /// Re-validate a field every time it changes.
    ///
    /// Default: false
    pub validate_on_change: bool,

    /// Rules per field.
    ///
    /// Default: none
    pub rules: RuleConfig,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFormConfig {
    #[serde(default)]
    initial_values: Record,
    #[serde(default)]
    validate_on_change: bool,
    #[serde(default)]
    rules: serde_json::Value,
}

impl FormConfig {
    /// Creates a new form config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial values.
    pub fn with_initial_values(mut self, values: Record) -> Self {
        self.initial_values = values;
        self
    }

    /// Sets whether fields are re-validated on change.
    pub fn with_validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    /// Sets the rule configuration.
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Parses a form config from JSON text.
    pub fn from_json_str(
        text: &str,
        registry: &RuleRegistry,
        mode: ConfigMode,
    ) -> Result<Self, ConfigError> {
        let raw: RawFormConfig = serde_json::from_str(text)?;
        let rules = RuleConfig::from_value(&raw.rules, registry, mode)?;

        for field in rules.field_names() {
            if !raw.initial_values.contains(field) {
                log::debug!("Rules configured for '{}' which has no initial value", field);
            }
        }

        Ok(Self {
            initial_values: raw.initial_values,
            validate_on_change: raw.validate_on_change,
            rules,
        })
    }

    /// Loads a form config from a JSON file.
    pub fn load(
        path: impl AsRef<Path>,
        registry: &RuleRegistry,
        mode: ConfigMode,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading form config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text, registry, mode)
    }
}
