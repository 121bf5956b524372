//! Ordered rule configuration and its builder.

use std::sync::Arc;

use serde_json::Value;

use super::Predicate;
use super::RuleDescriptor;
use super::RuleRegistry;
use super::Threshold;
use crate::FieldValue;
use crate::error::ConfigError;

/// How configuration problems are handled while building a [`RuleConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigMode {
    /// Reject unknown rule kinds, missing or unusable thresholds and
    /// malformed descriptors.
    #[default]
    Strict,
    /// Drop unknown kinds and malformed descriptors, keep thresholdless
    /// length rules as no-ops. Each problem is logged as a warning.
    Lenient,
}

/// A rule resolved against a registry, ready to apply.
#[derive(Clone)]
pub struct Rule {
    kind: String,
    descriptor: RuleDescriptor,
    predicate: Predicate,
}

impl Rule {
    /// Returns the identifier the rule was configured with.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.descriptor.message
    }

    /// Returns the descriptor.
    pub fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    /// Applies the rule. `true` means the value passes.
    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value, &self.descriptor)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// The ordered rules configured for one field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Per-field rule configuration.
///
/// Fields keep the order they were declared in, and so do the rules of
/// each field. Evaluation order is declaration order: the first failing
/// rule of a field is the one reported.
///
/// # JSON shape
///
/// ```json
/// {
///   "email": {
///     "required": { "message": "Email is required" },
///     "email-format": { "message": "Invalid email" }
///   },
///   "password": {
///     "min": { "message": "Too short", "value": 8 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleConfig {
    fields: Vec<FieldRules>,
}

impl RuleConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a configuration against `registry`.
    pub fn builder(registry: &RuleRegistry) -> RuleConfigBuilder<'_> {
        RuleConfigBuilder {
            registry,
            mode: ConfigMode::default(),
            fields: Vec::new(),
            current: None,
            error: None,
        }
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(
        text: &str,
        registry: &RuleRegistry,
        mode: ConfigMode,
    ) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value, registry, mode)
    }

    /// Builds a configuration from a parsed JSON value.
    ///
    /// `null` is an empty configuration.
    pub fn from_value(
        value: &Value,
        registry: &RuleRegistry,
        mode: ConfigMode,
    ) -> Result<Self, ConfigError> {
        let fields = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(fields) => fields,
            other => {
                return Err(ConfigError::malformed(
                    "rules",
                    format!("expected an object, found {}", json_type(other)),
                ));
            }
        };

        let mut builder = Self::builder(registry).mode(mode);
        for (field, rules) in fields {
            builder.start_field(field.clone());
            let Value::Object(rules) = rules else {
                builder.degrade(ConfigError::malformed(
                    field,
                    format!("expected an object of rules, found {}", json_type(rules)),
                ))?;
                continue;
            };
            for (kind, descriptor) in rules {
                match serde_json::from_value::<RuleDescriptor>(descriptor.clone()) {
                    Ok(descriptor) => builder.push_rule(kind, descriptor)?,
                    Err(e) => {
                        builder.degrade(ConfigError::malformed(format!("{}.{}", field, kind), e.to_string()))?
                    }
                }
            }
        }
        builder.build()
    }

    /// Returns the rules for a field, empty if it has none.
    pub fn rules_for(&self, field: &str) -> &[Rule] {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.rules.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over configured fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }

    /// Iterates over configured field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns a configuration holding only `field`'s rules.
    pub fn subset(&self, field: &str) -> RuleConfig {
        RuleConfig {
            fields: self
                .fields
                .iter()
                .filter(|f| f.name == field)
                .cloned()
                .collect(),
        }
    }

    /// Returns the number of configured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field has rules.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the total number of rules across all fields.
    pub fn rule_count(&self) -> usize {
        self.fields.iter().map(|f| f.rules.len()).sum()
    }
}

/// Fluent builder for [`RuleConfig`].
///
/// The first configuration problem is held until [`build`](Self::build).
pub struct RuleConfigBuilder<'a> {
    registry: &'a RuleRegistry,
    mode: ConfigMode,
    fields: Vec<FieldRules>,
    current: Option<usize>,
    error: Option<ConfigError>,
}

impl RuleConfigBuilder<'_> {
    /// Sets how configuration problems are handled.
    pub fn mode(mut self, mode: ConfigMode) -> Self {
        self.mode = mode;
        self
    }

    /// Selects the field subsequent rules apply to.
    ///
    /// Selecting a field again appends to its existing rules.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.start_field(name.into());
        self
    }

    /// Adds a rule to the current field.
    pub fn rule(mut self, kind: impl AsRef<str>, descriptor: RuleDescriptor) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.push_rule(kind.as_ref(), descriptor) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> Result<RuleConfig, ConfigError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(RuleConfig {
                fields: self.fields,
            }),
        }
    }

    fn start_field(&mut self, name: String) {
        let index = match self.fields.iter().position(|f| f.name == name) {
            Some(index) => index,
            None => {
                self.fields.push(FieldRules {
                    name,
                    rules: Vec::new(),
                });
                self.fields.len() - 1
            }
        };
        self.current = Some(index);
    }

    fn push_rule(&mut self, kind: &str, descriptor: RuleDescriptor) -> Result<(), ConfigError> {
        let Some(index) = self.current else {
            return Err(ConfigError::malformed(kind, "rule declared before any field"));
        };
        let field = self.fields[index].name.clone();

        let registry = self.registry;
        let Some(registered) = registry.get(kind) else {
            return self.degrade(ConfigError::unknown_rule(&field, kind));
        };

        if registered.requires_threshold {
            let problem = match &descriptor.value {
                None => Some(ConfigError::missing_threshold(&field, kind)),
                Some(Threshold::List(_)) => Some(ConfigError::invalid_threshold(
                    &field,
                    kind,
                    "expected a single number, found a list",
                )),
                Some(Threshold::Single(n)) if !n.is_finite() || *n < 0.0 => Some(
                    ConfigError::invalid_threshold(&field, kind, "must be a non-negative number"),
                ),
                Some(Threshold::Single(_)) => None,
            };
            if let Some(problem) = problem {
                self.degrade(problem)?;
            }
        }

        self.fields[index].rules.push(Rule {
            kind: kind.to_string(),
            descriptor,
            predicate: Arc::clone(&registered.predicate),
        });
        Ok(())
    }

    fn degrade(&self, error: ConfigError) -> Result<(), ConfigError> {
        match self.mode {
            ConfigMode::Strict => Err(error),
            ConfigMode::Lenient => {
                log::warn!("Ignoring rule configuration problem: {}", error);
                Ok(())
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
