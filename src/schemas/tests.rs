// src/schemas/tests.rs

use super::*;
use crate::common::{ValidationResult, Validator, ViolationKind};
use crate::constraints::Constraint;
use crate::payloads::account::AccountCreationRequest;
use crate::payloads::transaction::TransactionRequest;
use crate::payloads::user_account::{UserAccountRequest, EMAIL_NOT_VERIFIED};

fn registry() -> SchemaRegistry {
    SchemaRegistry::build().expect("schemas build")
}

fn transaction(
    amount: f64,
    sid: i64,
    manager: &str,
    login: &str,
    currency: &str,
    comment: &str,
) -> TransactionRequest {
    TransactionRequest {
        amount,
        sid,
        manager: Some(manager.to_string()),
        login: Some(login.to_string()),
        currency: Some(currency.to_string()),
        comment: Some(comment.to_string()),
    }
}

fn verified_user(email_verified: Option<bool>) -> UserAccountRequest {
    UserAccountRequest {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        middle_name: None,
        country: Some("KE".to_string()),
        phone: Some("+254700000000".to_string()),
        email: Some("jane@example.com".to_string()),
        client_type: Some("individual".to_string()),
        email_verified,
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_builds_every_kind() {
    let registry = registry();
    assert_eq!(registry.len(), SchemaKind::ALL.len());
    for kind in SchemaKind::ALL {
        assert_eq!(registry.get(kind).kind(), kind);
    }
    assert_eq!(registry.iter().count(), 7);
}

#[test]
fn test_builder_rejects_duplicate_field() {
    let err = Schema::builder(SchemaKind::Pagination)
        .field("limit", vec![Constraint::not_null()])
        .field("limit", vec![Constraint::greater_than_zero()])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::DuplicateField { field: "limit", .. }
    ));
}

#[test]
fn test_builder_rejects_empty_schema() {
    let err = Schema::builder(SchemaKind::Pagination).build().unwrap_err();
    assert!(matches!(err, SchemaError::Empty { .. }));
}

#[test]
fn test_builder_surfaces_bad_pattern() {
    fn broken() -> Result<Schema, SchemaError> {
        Schema::builder(SchemaKind::Transaction)
            .field("login", vec![Constraint::pattern("(unclosed")?])
            .build()
    }
    assert!(matches!(broken(), Err(SchemaError::Constraint(_))));
}

#[test]
fn test_labels() {
    assert_eq!(SchemaKind::Transaction.label(), "Transaction Payload");
    assert_eq!(SchemaKind::Pagination.to_string(), "Pagination Payload");
}

// ============================================================================
// Engine
// ============================================================================

#[test]
fn test_evaluate_valid_transaction() {
    let registry = registry();
    let request = transaction(100.0, 1, "123", "456", "usd", "Deposit");
    assert_eq!(
        evaluate(registry.get(SchemaKind::Transaction), &request),
        ValidationResult::Valid
    );
}

#[test]
fn test_evaluate_reports_every_failure_in_order() {
    let registry = registry();
    let request = transaction(-5.0, 0, "abc", "12x", "GBP", "   ");
    let result = evaluate(registry.get(SchemaKind::Transaction), &request);

    let fields: Vec<&str> = result.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["amount", "sid", "manager", "login", "currency", "comment"]
    );
    assert_eq!(result.violations()[4].message, "must be a supported currency");
}

#[test]
fn test_every_transaction_field_broken_once() {
    let registry = registry();
    let request = transaction(-100.0, 0, "", "", "JPY", "");
    let result = evaluate(registry.get(SchemaKind::Transaction), &request);

    assert_eq!(result.violations().len(), 6);
    let fields: Vec<&str> = result.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["amount", "sid", "manager", "login", "currency", "comment"]
    );
    assert_eq!(result.violations()[2].message, "must not be blank");
    assert_eq!(result.violations()[4].message, "must be a supported currency");
}

#[test]
fn test_blank_field_yields_single_violation() {
    let registry = registry();
    let request = transaction(10.0, 1, "", "456", "USD", "ok");
    let result = evaluate(registry.get(SchemaKind::Transaction), &request);

    assert_eq!(result.violations().len(), 1);
    assert_eq!(result.violations()[0].field, "manager");
    assert_eq!(result.violations()[0].message, "must not be blank");
}

#[test]
fn test_evaluate_is_repeatable() {
    let registry = registry();
    let schema = registry.get(SchemaKind::Transaction);
    let request = transaction(-1.0, 1, "1", "x", "USD", "");
    assert_eq!(schema.validate(&request), schema.validate(&request));
}

#[test]
fn test_gate_runs_after_field_rules() {
    let registry = registry();
    let mut request = verified_user(Some(false));
    request.country = Some("Kenya".to_string());

    let result = evaluate(registry.get(SchemaKind::UserAccount), &request);
    let violations = result.violations();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].field, "country");
    assert_eq!(violations[0].kind, ViolationKind::Field);
    assert_eq!(violations[1].field, "emailVerified");
    assert_eq!(violations[1].message, EMAIL_NOT_VERIFIED);
    assert_eq!(violations[1].kind, ViolationKind::Gate);
}

#[test]
fn test_gate_passes_when_verified_or_absent() {
    let registry = registry();
    let schema = registry.get(SchemaKind::UserAccount);
    assert!(schema.validate(&verified_user(Some(true))).is_valid());
    assert!(schema.validate(&verified_user(None)).is_valid());

    let rejected = schema.validate(&verified_user(Some(false)));
    assert_eq!(rejected.gate_violations().count(), 1);
    assert_eq!(rejected.field_violations().count(), 0);
}

// ============================================================================
// Structural pre-check
// ============================================================================

#[test]
fn test_malformed_json() {
    let registry = registry();
    let err = parse_and_validate::<TransactionRequest>(
        registry.get(SchemaKind::Transaction),
        b"{\"amount\": ",
    )
    .unwrap_err();
    assert!(matches!(err, StructuralError::MalformedJson(_)));
    assert!(err.to_string().starts_with("Failed to parse JSON:"));
}

#[test]
fn test_non_object_document() {
    let registry = registry();
    let err =
        parse_and_validate::<TransactionRequest>(registry.get(SchemaKind::Transaction), b"[1, 2]")
            .unwrap_err();
    assert_eq!(
        err,
        StructuralError::NotAnObject {
            payload: "Transaction Payload",
            found: JsonShape::Array,
        }
    );
    assert_eq!(err.to_string(), "Invalid Transaction Payload structure.");
}

#[test]
fn test_missing_keys_reported_before_fields() {
    let registry = registry();
    let body = br#"{"amount": -1, "sid": 0, "manager": "", "login": ""}"#;
    let err = parse_and_validate::<TransactionRequest>(registry.get(SchemaKind::Transaction), body)
        .unwrap_err();
    assert_eq!(
        err,
        StructuralError::MissingKeys {
            payload: "Transaction Payload",
            missing: vec!["currency", "comment"],
        }
    );
    assert_eq!(err.detail(), "missing keys: currency, comment");
}

#[test]
fn test_null_amount_is_a_type_error() {
    let registry = registry();
    let body = br#"{"amount": null, "sid": 1, "manager": "1", "login": "2", "currency": "USD", "comment": "x"}"#;
    let err = parse_and_validate::<TransactionRequest>(registry.get(SchemaKind::Transaction), body)
        .unwrap_err();
    assert!(matches!(err, StructuralError::FieldType(_)));
}

#[test]
fn test_custom_fields_shape_checked() {
    let registry = registry();
    let body = br#"{
        "user": 1, "password": "pw", "sid": 1, "groupName": "g", "leverage": 100,
        "initialBalance": 0, "notifyDisable": false, "readOnly": false,
        "customFields": "nope"
    }"#;
    let err =
        parse_and_validate::<AccountCreationRequest>(registry.get(SchemaKind::AccountCreation), body)
            .unwrap_err();
    assert_eq!(
        err,
        StructuralError::WrongShape {
            payload: "Account Creation Payload",
            field: "customFields",
            expected: JsonShape::Object,
            found: JsonShape::String,
        }
    );
}

#[test]
fn test_required_keys_exposed() {
    let registry = registry();
    let check = registry
        .get(SchemaKind::Pagination)
        .structure()
        .expect("pagination has a structural check");
    assert_eq!(check.required(), &["fromUserId", "limit", "offset"]);
    assert!(registry.get(SchemaKind::UserAccount).structure().is_none());
}

#[test]
fn test_parse_and_validate_returns_typed_payload() {
    let registry = registry();
    let body = br#"{"amount": 10.5, "sid": 3, "manager": "1", "login": "2", "currency": "KES", "comment": "fee"}"#;
    let (request, result) =
        parse_and_validate::<TransactionRequest>(registry.get(SchemaKind::Transaction), body)
            .expect("structurally valid");
    assert_eq!(request.sid, 3);
    assert!(result.is_valid());
}
