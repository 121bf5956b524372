use formkit_lib::rule::{ConfigMode, RuleConfig, RuleDescriptor, RuleKind, RuleRegistry};
use formkit_lib::{ErrorMapping, Record, validate, validate_field};

fn email_rules() -> RuleConfig {
    RuleConfig::builder(&RuleRegistry::builtin())
        .field("email")
        .rule("required", RuleDescriptor::new("required"))
        .rule("email-format", RuleDescriptor::new("bad format"))
        .build()
        .unwrap()
}

fn password_rules() -> RuleConfig {
    RuleConfig::builder(&RuleRegistry::builtin())
        .field("password")
        .rule("min", RuleDescriptor::new("too short").with_value(8.0))
        .build()
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_required_short_circuits() {
    let errors = validate(&Record::new().set("email", ""), &email_rules());
    assert_eq!(errors, [("email", "required")].into_iter().collect::<ErrorMapping>());
}

#[test]
fn test_format_reported_when_present() {
    let errors = validate(&Record::new().set("email", "not-an-email"), &email_rules());
    assert_eq!(errors.get("email"), Some("bad format"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_valid_email_has_no_errors() {
    let errors = validate(&Record::new().set("email", "a@b.com"), &email_rules());
    assert!(errors.is_empty());
}

#[test]
fn test_minimum_length() {
    let rules = password_rules();
    let errors = validate(&Record::new().set("password", "short"), &rules);
    assert_eq!(errors.get("password"), Some("too short"));

    let errors = validate(&Record::new().set("password", "longenough"), &rules);
    assert!(errors.is_empty());
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_empty_record_is_valid() {
    assert!(validate(&Record::new(), &email_rules()).is_empty());
    assert!(validate(&Record::new(), &password_rules()).is_empty());
}

#[test]
fn test_first_failing_rule_wins() {
    let rules = RuleConfig::builder(&RuleRegistry::builtin())
        .field("password")
        .rule(RuleKind::HasUppercaseLetter, RuleDescriptor::new("needs uppercase"))
        .rule(RuleKind::HasDigit, RuleDescriptor::new("needs digit"))
        .rule(RuleKind::MinimumLength, RuleDescriptor::new("too short").with_value(8.0))
        .build()
        .unwrap();

    let errors = validate(&Record::new().set("password", "abc"), &rules);
    assert_eq!(errors.get("password"), Some("needs uppercase"));

    let errors = validate(&Record::new().set("password", "Abc"), &rules);
    assert_eq!(errors.get("password"), Some("needs digit"));

    let errors = validate(&Record::new().set("password", "Abc1"), &rules);
    assert_eq!(errors.get("password"), Some("too short"));

    let errors = validate(&Record::new().set("password", "Abcdefg1"), &rules);
    assert!(errors.is_empty());
}

#[test]
fn test_json_key_order_decides_first_failure() {
    let registry = RuleRegistry::builtin();
    let digit_first = RuleConfig::from_json_str(
        r#"{"code": {"digit": {"message": "digit"}, "uppercase": {"message": "upper"}}}"#,
        &registry,
        ConfigMode::Strict,
    )
    .unwrap();
    let upper_first = RuleConfig::from_json_str(
        r#"{"code": {"uppercase": {"message": "upper"}, "digit": {"message": "digit"}}}"#,
        &registry,
        ConfigMode::Strict,
    )
    .unwrap();

    let record = Record::new().set("code", "abc");
    assert_eq!(validate(&record, &digit_first).get("code"), Some("digit"));
    assert_eq!(validate(&record, &upper_first).get("code"), Some("upper"));
}

#[test]
fn test_idempotent() {
    let rules = email_rules();
    let record = Record::new().set("email", "nope").set("other", "x");
    assert_eq!(validate(&record, &rules), validate(&record, &rules));
}

#[test]
fn test_fields_without_rules_are_ignored() {
    let errors = validate(&Record::new().set("nickname", ""), &email_rules());
    assert!(errors.is_empty());
}

#[test]
fn test_only_present_fields_are_checked() {
    let rules = RuleConfig::builder(&RuleRegistry::builtin())
        .field("email")
        .rule("required", RuleDescriptor::new("email required"))
        .field("name")
        .rule("required", RuleDescriptor::new("name required"))
        .build()
        .unwrap();

    let errors = validate(&Record::new().set("name", ""), &rules);
    assert_eq!(errors.get("name"), Some("name required"));
    assert!(!errors.contains("email"));
}

#[test]
fn test_required_checkbox() {
    let rules = RuleConfig::builder(&RuleRegistry::builtin())
        .field("terms")
        .rule("required", RuleDescriptor::new("accept the terms"))
        .build()
        .unwrap();

    assert_eq!(
        validate(&Record::new().set("terms", false), &rules).get("terms"),
        Some("accept the terms")
    );
    assert!(validate(&Record::new().set("terms", true), &rules).is_empty());
}

#[test]
fn test_custom_rule_kind() {
    let mut registry = RuleRegistry::builtin();
    registry.register("no-spaces", |value, _| !value.text().contains(' '));

    let rules = RuleConfig::builder(&registry)
        .field("username")
        .rule("no-spaces", RuleDescriptor::new("no spaces allowed"))
        .build()
        .unwrap();

    assert_eq!(
        validate_field("username", &"a b".into(), &rules),
        Some("no spaces allowed".to_string())
    );
    assert_eq!(validate_field("username", &"ab".into(), &rules), None);
}

#[test]
fn test_lenient_thresholdless_minimum_is_noop() {
    let rules = RuleConfig::builder(&RuleRegistry::builtin())
        .mode(ConfigMode::Lenient)
        .field("password")
        .rule("min", RuleDescriptor::new("too short"))
        .build()
        .unwrap();

    assert_eq!(rules.rule_count(), 1);
    assert!(validate(&Record::new().set("password", ""), &rules).is_empty());
}

#[test]
fn test_array_values() {
    let rules = RuleConfig::builder(&RuleRegistry::builtin())
        .field("tags")
        .rule("required", RuleDescriptor::new("pick a tag"))
        .rule("max", RuleDescriptor::new("too many tags").with_value(2.0))
        .build()
        .unwrap();

    let empty: Vec<&str> = Vec::new();
    assert_eq!(
        validate(&Record::new().set("tags", empty), &rules).get("tags"),
        Some("pick a tag")
    );
    assert_eq!(
        validate(&Record::new().set("tags", vec!["a", "b", "c"]), &rules).get("tags"),
        Some("too many tags")
    );
    assert!(validate(&Record::new().set("tags", vec!["a", "b"]), &rules).is_empty());
}
