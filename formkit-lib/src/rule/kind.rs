//! Built-in rule kinds and their predicates.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::RuleDescriptor;
use crate::FieldValue;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// The rule kinds every [`RuleRegistry::builtin`](super::RuleRegistry::builtin)
/// knows about.
///
/// Each kind has a canonical identifier and a few short aliases, so both
/// `"minimum-length"` and `"min"` resolve to [`RuleKind::MinimumLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Fails on `false` or on text that is empty after trimming.
    Required,
    /// Fails unless the text looks like `x@y.z` with no whitespace.
    EmailFormat,
    /// Fails unless the text contains an ASCII uppercase letter.
    HasUppercaseLetter,
    /// Fails unless the text contains an ASCII digit.
    HasDigit,
    /// Fails if the length is below the threshold.
    MinimumLength,
    /// Fails if the length is above the threshold.
    MaximumLength,
}

impl RuleKind {
    /// All built-in kinds.
    pub const ALL: [RuleKind; 6] = [
        RuleKind::Required,
        RuleKind::EmailFormat,
        RuleKind::HasUppercaseLetter,
        RuleKind::HasDigit,
        RuleKind::MinimumLength,
        RuleKind::MaximumLength,
    ];

    /// Returns the canonical identifier.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::EmailFormat => "email-format",
            RuleKind::HasUppercaseLetter => "has-uppercase-letter",
            RuleKind::HasDigit => "has-digit",
            RuleKind::MinimumLength => "minimum-length",
            RuleKind::MaximumLength => "maximum-length",
        }
    }

    /// Returns the alternative identifiers accepted for this kind.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            RuleKind::Required => &[],
            RuleKind::EmailFormat => &["email"],
            RuleKind::HasUppercaseLetter => &["uppercase", "capital"],
            RuleKind::HasDigit => &["digit", "number"],
            RuleKind::MinimumLength => &["min", "min-length"],
            RuleKind::MaximumLength => &["max", "max-length"],
        }
    }

    /// Returns `true` if the kind needs a single numeric `value`.
    pub fn requires_threshold(&self) -> bool {
        matches!(self, RuleKind::MinimumLength | RuleKind::MaximumLength)
    }

    /// Applies the predicate. `true` means the value passes.
    pub fn check(&self, value: &FieldValue, descriptor: &RuleDescriptor) -> bool {
        match self {
            RuleKind::Required => required(value),
            RuleKind::EmailFormat => EMAIL_SHAPE.is_match(&value.text()),
            RuleKind::HasUppercaseLetter => value.text().chars().any(|c| c.is_ascii_uppercase()),
            RuleKind::HasDigit => value.text().chars().any(|c| c.is_ascii_digit()),
            RuleKind::MinimumLength => match (value.length(), descriptor.single()) {
                (Some(len), Some(min)) => (len as f64) >= min,
                _ => true,
            },
            RuleKind::MaximumLength => match (value.length(), descriptor.single()) {
                (Some(len), Some(max)) => (len as f64) <= max,
                _ => true,
            },
        }
    }
}

fn required(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(b) => *b,
        other => !other.text().trim().is_empty(),
    }
}

impl AsRef<str> for RuleKind {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.aliases().contains(&s))
            .ok_or_else(|| format!("unknown rule kind '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg() -> RuleDescriptor {
        RuleDescriptor::new("failed")
    }

    #[test]
    fn test_required() {
        let kind = RuleKind::Required;
        assert!(!kind.check(&"".into(), &msg()));
        assert!(!kind.check(&"   ".into(), &msg()));
        assert!(!kind.check(&false.into(), &msg()));
        assert!(!kind.check(&FieldValue::Array(vec![]), &msg()));
        assert!(!kind.check(&FieldValue::Null, &msg()));
        assert!(kind.check(&true.into(), &msg()));
        assert!(kind.check(&0.into(), &msg()));
        assert!(kind.check(&" x ".into(), &msg()));
    }

    #[test]
    fn test_email_format() {
        let kind = RuleKind::EmailFormat;
        assert!(kind.check(&"a@b.com".into(), &msg()));
        assert!(!kind.check(&"not-an-email".into(), &msg()));
        assert!(!kind.check(&"a@b".into(), &msg()));
        assert!(!kind.check(&"a b@c.com".into(), &msg()));
        assert!(!kind.check(&"".into(), &msg()));
    }

    #[test]
    fn test_character_classes() {
        assert!(RuleKind::HasUppercaseLetter.check(&"abC".into(), &msg()));
        assert!(!RuleKind::HasUppercaseLetter.check(&"abc1".into(), &msg()));
        assert!(!RuleKind::HasUppercaseLetter.check(&"Éé".into(), &msg()));
        assert!(RuleKind::HasDigit.check(&"ab3".into(), &msg()));
        assert!(RuleKind::HasDigit.check(&7.into(), &msg()));
        assert!(!RuleKind::HasDigit.check(&"abc".into(), &msg()));
    }

    #[test]
    fn test_length_bounds() {
        let min = RuleDescriptor::new("short").with_value(8.0);
        assert!(!RuleKind::MinimumLength.check(&"short".into(), &min));
        assert!(RuleKind::MinimumLength.check(&"longenough".into(), &min));
        assert!(RuleKind::MinimumLength.check(&"12345678".into(), &min));

        let max = RuleDescriptor::new("long").with_value(3.0);
        assert!(RuleKind::MaximumLength.check(&"abc".into(), &max));
        assert!(!RuleKind::MaximumLength.check(&"abcd".into(), &max));
    }

    #[test]
    fn test_length_without_threshold_passes() {
        assert!(RuleKind::MinimumLength.check(&"".into(), &msg()));
        let list = RuleDescriptor::new("x").with_values(vec![1.0, 2.0]);
        assert!(RuleKind::MinimumLength.check(&"".into(), &list));
        let min = RuleDescriptor::new("short").with_value(8.0);
        assert!(RuleKind::MinimumLength.check(&12.into(), &min));
        assert!(RuleKind::MinimumLength.check(&FieldValue::Null, &min));
        assert!(!RuleKind::EmailFormat.check(&FieldValue::Null, &msg()));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("min".parse::<RuleKind>(), Ok(RuleKind::MinimumLength));
        assert_eq!("email".parse::<RuleKind>(), Ok(RuleKind::EmailFormat));
        assert_eq!("has-digit".parse::<RuleKind>(), Ok(RuleKind::HasDigit));
        assert!("requried".parse::<RuleKind>().is_err());
    }
}
