use super::*;

fn violations_for(constraint: &Constraint, value: FieldValue<'_>) -> Vec<Violation> {
    let mut out = Vec::new();
    constraint.evaluate("field", value, &mut out);
    out
}

#[test]
fn test_not_null() {
    let c = Constraint::not_null();
    assert!(!c.passes(FieldValue::Absent));
    assert!(c.passes(FieldValue::Int(0)));
    assert!(c.passes(FieldValue::Str("")));
    assert_eq!(
        violations_for(&c, FieldValue::Absent)[0].message,
        "must not be null"
    );
}

#[test]
fn test_not_blank() {
    let c = Constraint::not_blank();
    assert!(!c.passes(FieldValue::Absent));
    assert!(!c.passes(FieldValue::Str("")));
    assert!(!c.passes(FieldValue::Str("   \t")));
    assert!(c.passes(FieldValue::Str(" x ")));
}

#[test]
fn test_pattern_is_full_match() {
    let c = Constraint::pattern("^[A-Z]{3}$").unwrap();
    assert!(c.passes(FieldValue::Str("USD")));
    assert!(!c.passes(FieldValue::Str("USD$")));
    assert!(!c.passes(FieldValue::Str("US")));
    assert!(!c.passes(FieldValue::Str("usd")));

    // Unanchored expressions are still matched against the whole value
    let digits = Constraint::pattern(r"\d+").unwrap();
    assert!(digits.passes(FieldValue::Str("12345")));
    assert!(!digits.passes(FieldValue::Str("12a45")));
}

#[test]
fn test_pattern_skips_absent_and_blank() {
    let c = Constraint::pattern(r"^\d+$").unwrap();
    assert!(c.passes(FieldValue::Absent));
    assert!(c.passes(FieldValue::Str("")));
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let err = Constraint::pattern("([unclosed").unwrap_err();
    assert!(err.to_string().contains("([unclosed"));
}

#[test]
fn test_numeric_sign_checks() {
    let positive = Constraint::greater_than_zero();
    assert!(!positive.passes(FieldValue::Int(0)));
    assert!(!positive.passes(FieldValue::Int(-5)));
    assert!(!positive.passes(FieldValue::Float(-100.0)));
    assert!(positive.passes(FieldValue::Int(1)));
    assert!(positive.passes(FieldValue::Float(0.001)));
    assert!(positive.passes(FieldValue::Absent));

    let non_negative = Constraint::positive_or_zero();
    assert!(non_negative.passes(FieldValue::Int(0)));
    assert!(!non_negative.passes(FieldValue::Int(-1)));
}

#[test]
fn test_decimal_min_inclusive() {
    let c = Constraint::decimal_min(0.01, true);
    assert!(!c.passes(FieldValue::Float(0.0)));
    assert!(!c.passes(FieldValue::Float(-1.0)));
    assert!(c.passes(FieldValue::Float(0.01)));
    assert!(c.passes(FieldValue::Float(100.0)));
    assert_eq!(c.message(), "must be greater than or equal to 0.01");

    let exclusive = Constraint::decimal_min(0.01, false);
    assert!(!exclusive.passes(FieldValue::Float(0.01)));
}

#[test]
fn test_one_of_case_insensitive() {
    let c = Constraint::one_of(&["USD", "EUR", "KES"], true);
    assert!(c.passes(FieldValue::Str("usd")));
    assert!(c.passes(FieldValue::Str("USD")));
    assert!(c.passes(FieldValue::Str("Kes")));
    assert!(!c.passes(FieldValue::Str("JPY")));
    assert!(!c.passes(FieldValue::Str("INR")));
    assert_eq!(c.message(), "must be one of [EUR, KES, USD]");

    let strict = Constraint::one_of(&["USD"], false);
    assert!(!strict.passes(FieldValue::Str("usd")));
}

#[test]
fn test_email() {
    let c = Constraint::email().unwrap();
    assert!(c.passes(FieldValue::Str("john.doe@example.com")));
    assert!(c.passes(FieldValue::Str("a+tag@mail.example.co")));
    assert!(!c.passes(FieldValue::Str("invalid-email")));
    assert!(!c.passes(FieldValue::Str("user@localhost")));
    assert!(!c.passes(FieldValue::Str("@example.com")));
    assert!(!c.passes(FieldValue::Str("user@.com")));
}

#[test]
fn test_entries_not_blank_reports_each_entry() {
    let c = Constraint::entries_not_blank(
        "Custom field key cannot be blank",
        "Custom field value cannot be blank",
    );
    let mut map = BTreeMap::new();
    map.insert("".to_string(), "value".to_string());
    map.insert("key".to_string(), " ".to_string());
    map.insert("ok".to_string(), "fine".to_string());

    let out = violations_for(&c, FieldValue::Map(&map));
    assert_eq!(out.len(), 2);
    assert!(out
        .iter()
        .any(|v| v.field == "field." && v.message == "Custom field key cannot be blank"));
    assert!(out
        .iter()
        .any(|v| v.field == "field.key" && v.message == "Custom field value cannot be blank"));
}

#[test]
fn test_with_message_overrides_default() {
    let c = Constraint::positive_or_zero().with_message("Initial balance must be zero or positive");
    let out = violations_for(&c, FieldValue::Int(-1));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].field, "field");
    assert_eq!(out[0].message, "Initial balance must be zero or positive");
}
