//! ConfigError for rule and form configuration

use thiserror::Error;

/// Errors raised while building a rule or form configuration.
///
/// Validation itself never fails; every error a caller can see is raised
/// here, before a [`RuleConfig`](crate::rule::RuleConfig) exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule kind is not registered.
    #[error("Unknown rule kind '{kind}' on field '{field}'")]
    UnknownRule { field: String, kind: String },

    /// A rule that compares against a threshold was given none.
    #[error("Rule '{kind}' on field '{field}' requires a numeric `value`")]
    MissingThreshold { field: String, kind: String },

    /// The threshold is present but not usable by the rule.
    #[error("Rule '{kind}' on field '{field}' has an invalid `value`: {reason}")]
    InvalidThreshold {
        field: String,
        kind: String,
        reason: String,
    },

    /// The configuration does not have the expected shape.
    #[error("Malformed configuration at '{path}': {reason}")]
    Malformed { path: String, reason: String },

    /// Reading a configuration file failed.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON.
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new unknown rule error.
    pub fn unknown_rule(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownRule {
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Creates a new missing threshold error.
    pub fn missing_threshold(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::MissingThreshold {
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Creates a new invalid threshold error.
    pub fn invalid_threshold(
        field: impl Into<String>,
        kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidThreshold {
            field: field.into(),
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new malformed configuration error.
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
