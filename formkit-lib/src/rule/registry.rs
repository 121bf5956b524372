//! Registry mapping rule identifiers to predicates.

use std::collections::HashMap;
use std::sync::Arc;

use super::RuleDescriptor;
use super::RuleKind;
use crate::FieldValue;

/// A pure rule predicate. Returns `true` when the value passes.
pub type Predicate = Arc<dyn Fn(&FieldValue, &RuleDescriptor) -> bool + Send + Sync>;

/// A registered rule kind.
#[derive(Clone)]
pub(crate) struct RegisteredRule {
    pub(crate) predicate: Predicate,
    pub(crate) requires_threshold: bool,
}

/// Maps rule identifiers to predicates.
///
/// Lookups happen while a [`RuleConfig`](super::RuleConfig) is built, never
/// during validation.
///
/// # Example
///
/// ```
/// use formkit_lib::rule::RuleRegistry;
///
/// let mut registry = RuleRegistry::builtin();
/// registry.register("no-spaces", |value, _| !value.text().contains(' '));
///
/// assert!(registry.contains("no-spaces"));
/// assert!(registry.contains("min"));
/// assert!(!registry.contains("nope"));
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RegisteredRule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every [`RuleKind`] under its canonical
    /// name and aliases.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in RuleKind::ALL {
            let rule = RegisteredRule {
                predicate: Arc::new(move |value: &FieldValue, descriptor: &RuleDescriptor| {
                    kind.check(value, descriptor)
                }),
                requires_threshold: kind.requires_threshold(),
            };
            for name in std::iter::once(kind.name()).chain(kind.aliases().iter().copied()) {
                registry.rules.insert(name.to_string(), rule.clone());
            }
        }
        registry
    }

    /// Registers a custom rule kind, replacing any rule with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&FieldValue, &RuleDescriptor) -> bool + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate), false)
    }

    /// Registers a custom rule kind that needs a single numeric `value`.
    pub fn register_with_threshold<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&FieldValue, &RuleDescriptor) -> bool + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate), true)
    }

    fn insert(&mut self, name: String, predicate: Predicate, requires_threshold: bool) -> &mut Self {
        log::debug!("Registering rule kind '{}'", name);
        self.rules.insert(
            name,
            RegisteredRule {
                predicate,
                requires_threshold,
            },
        );
        self
    }

    /// Returns `true` if a rule with this identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns the predicate registered under `name`.
    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.rules.get(name).map(|rule| &rule.predicate)
    }

    /// Iterates over registered identifiers in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&RegisteredRule> {
        self.rules.get(name)
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}
