//! Validation rules
//!
//! A rule is a named predicate plus a user-facing failure message,
//! optionally parameterized by a numeric threshold. Rule kinds are looked
//! up by identifier in a [`RuleRegistry`] when a [`RuleConfig`] is built,
//! so a misspelled kind is caught before any value is validated.
//!
//! # Example
//!
//! ```
//! use formkit_lib::rule::{RuleConfig, RuleDescriptor, RuleKind, RuleRegistry};
//!
//! let registry = RuleRegistry::builtin();
//! let rules = RuleConfig::builder(&registry)
//!     .field("email")
//!         .rule(RuleKind::Required, RuleDescriptor::new("Email is required"))
//!         .rule(RuleKind::EmailFormat, RuleDescriptor::new("Invalid email"))
//!     .field("password")
//!         .rule("min", RuleDescriptor::new("Too short").with_value(8.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(rules.rules_for("email").len(), 2);
//! ```

mod config;
mod descriptor;
mod kind;
mod registry;

pub use config::{ConfigMode, FieldRules, Rule, RuleConfig, RuleConfigBuilder};
pub use descriptor::{RuleDescriptor, Threshold};
pub use kind::RuleKind;
pub use registry::{Predicate, RuleRegistry};
