// src/accounts/tests.rs

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use super::models::AccountLookupRequest;
use super::services::{AccountDirectory, LookupError};
use crate::common::{AppState, ServerConfig, Validator};
use crate::schemas::{SchemaKind, SchemaRegistry};

async fn lookup(body: &str) -> (StatusCode, Value) {
    let state = AppState::new(ServerConfig::default()).expect("state builds");
    let app = crate::build_router(Arc::new(state));

    let request = Request::builder()
        .method("POST")
        .uri("/api/account/getAssociatedAccounts")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_account_id_schema() {
    let registry = SchemaRegistry::build().unwrap();
    let schema = registry.get(SchemaKind::AccountLookup);
    let request = |id: Option<&str>| AccountLookupRequest {
        account_id: id.map(str::to_string),
    };

    assert!(schema.validate(&request(Some("123"))).is_valid());

    let result = schema.validate(&request(Some("abc")));
    assert_eq!(result.violations().len(), 1);
    assert_eq!(result.violations()[0].field, "accountId");
    assert_eq!(
        result.violations()[0].message,
        "Account ID must be a numeric string."
    );

    let result = schema.validate(&request(None));
    assert_eq!(result.violations().len(), 1);
    assert_eq!(result.violations()[0].message, "must not be blank");
}

#[test]
fn test_directory_lookup() {
    let directory = AccountDirectory::with_fixtures();
    assert_eq!(
        directory.associated_accounts("1").unwrap(),
        &["AccountA".to_string(), "AccountB".to_string()]
    );
    assert_eq!(directory.associated_accounts("2").unwrap().len(), 1);

    let err = directory.associated_accounts("999").unwrap_err();
    assert_eq!(err, LookupError::NoAssociations("999".to_string()));
    assert_eq!(
        err.to_string(),
        "No associated accounts found for account ID 999"
    );
}

#[test]
fn test_directory_empty_association_is_an_error() {
    let directory = AccountDirectory::new().with_association("5", Vec::<String>::new());
    assert!(directory.associated_accounts("5").is_err());
}

#[tokio::test]
async fn test_lookup_known_account() {
    let (status, body) = lookup(r#"{"accountId": "1"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["AccountA", "AccountB"]));
}

#[tokio::test]
async fn test_lookup_unknown_account() {
    let (status, body) = lookup(r#"{"accountId": "999"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NO_ASSOCIATED_ACCOUNTS");
    assert_eq!(body["error"], "No associated accounts found for account ID 999");
}

#[tokio::test]
async fn test_lookup_non_numeric_id() {
    let (status, body) = lookup(r#"{"accountId": "abc"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["violations"][0]["field"], "accountId");
}
