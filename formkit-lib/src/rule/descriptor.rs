//! Rule descriptors as written in a rule configuration.

use serde::Deserialize;
use serde::Serialize;

/// Per-field, per-rule configuration: the failure message and an optional
/// threshold.
///
/// ```json
/// { "message": "Too short", "value": 8 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// Message recorded when the rule fails.
    pub message: String,

    /// Threshold, interpreted only by length rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Threshold>,
}

impl RuleDescriptor {
    /// Creates a descriptor with no threshold.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: None,
        }
    }

    /// Sets a single numeric threshold.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(Threshold::Single(value));
        self
    }

    /// Sets a list of numeric thresholds.
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.value = Some(Threshold::List(values));
        self
    }

    /// Returns the threshold if it is a single number.
    pub fn single(&self) -> Option<f64> {
        match self.value {
            Some(Threshold::Single(n)) => Some(n),
            _ => None,
        }
    }
}

/// A rule threshold: one number or a list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Single(f64),
    List(Vec<f64>),
}
