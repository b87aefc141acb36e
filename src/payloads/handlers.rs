// src/payloads/handlers.rs

use axum::{extract::Extension, Json};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::account::AccountCreationRequest;
use super::conversion::CurrencyConversionRequest;
use super::models::{ConversionResponse, MessageResponse, VerdictResponse};
use super::pagination::PaginationRequest;
use super::transaction::TransactionRequest;
use super::user_account::UserAccountRequest;
use super::verification::UserVerificationRequest;
use crate::common::{safe_email_log, ApiError, AppState, ValidationResult};
use crate::schemas::{self, Payload, SchemaKind};

// ============================================================================
// Shared pipeline helpers
// ============================================================================

/// Run the structural pre-check, typed parse and schema for one body
pub(crate) fn validate_body<P>(
    state: &AppState,
    kind: SchemaKind,
    body: &[u8],
) -> Result<(P, ValidationResult), ApiError>
where
    P: Payload + DeserializeOwned,
{
    schemas::parse_and_validate::<P>(state.schemas.get(kind), body).map_err(|e| {
        warn!(
            schema = %kind,
            error = %e,
            detail = %e.detail(),
            "Payload rejected before field validation"
        );
        ApiError::from(e)
    })
}

pub(crate) fn ensure_valid(kind: SchemaKind, result: ValidationResult) -> Result<(), ApiError> {
    if result.is_valid() {
        return Ok(());
    }

    warn!(
        schema = %kind,
        violations = ?result.violations(),
        "Payload validation failed"
    );
    Err(ApiError::from(result))
}

// ============================================================================
// Typed payload handlers
// ============================================================================

/// POST /api/validate - Validate an account creation payload
pub async fn validate_account_creation(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = SchemaKind::AccountCreation;
    let (request, result) = validate_body::<AccountCreationRequest>(&state, kind, &body)?;
    ensure_valid(kind, result)?;

    info!(
        user = ?request.user,
        sid = ?request.sid,
        custom_fields = request.custom_fields.as_ref().map_or(0, |f| f.len()),
        "Account creation payload accepted"
    );

    Ok(Json(MessageResponse::new("Request validated successfully")))
}

/// POST /api/validate/transaction - Validate a transaction payload
pub async fn validate_transaction(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = SchemaKind::Transaction;
    let (request, result) = validate_body::<TransactionRequest>(&state, kind, &body)?;
    ensure_valid(kind, result)?;

    info!(
        sid = request.sid,
        amount = request.amount,
        currency = ?request.currency,
        "Transaction payload accepted"
    );

    Ok(Json(MessageResponse::new("Transaction is valid.")))
}

/// POST /api/validate/create - Validate a user account, then the email gate
pub async fn create_user_account(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = SchemaKind::UserAccount;
    let (request, result) = validate_body::<UserAccountRequest>(&state, kind, &body)?;
    ensure_valid(kind, result)?;

    info!(
        email = %safe_email_log(request.email.as_deref().unwrap_or_default()),
        client_type = ?request.client_type,
        "User account payload accepted"
    );

    Ok(Json(MessageResponse::new("User account created successfully.")))
}

/// POST /api/convert - Validate and echo a currency conversion request
pub async fn convert_currency(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ConversionResponse>, ApiError> {
    let kind = SchemaKind::CurrencyConversion;
    let (request, result) = validate_body::<CurrencyConversionRequest>(&state, kind, &body)?;
    ensure_valid(kind, result)?;

    let response = ConversionResponse::from(request);
    info!(
        from = ?response.from_currency,
        to = ?response.to_currency,
        amount = ?response.amount,
        "Currency conversion accepted"
    );

    Ok(Json(response))
}

// ============================================================================
// Raw-JSON verdict handlers
// ============================================================================

/// POST /api/validate/user - Key check, then a pass/fail verdict
pub async fn validate_user_verification(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<VerdictResponse>, ApiError> {
    let kind = SchemaKind::UserVerification;
    let (request, result) = validate_body::<UserVerificationRequest>(&state, kind, &body)?;

    Ok(Json(verdict(
        kind,
        request.is_acceptable(),
        result,
        "User Verification Payload Valid",
        "Invalid User Verification Payload",
    )))
}

/// POST /api/validate/pagination - Key check, then a pass/fail verdict
pub async fn validate_pagination(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<VerdictResponse>, ApiError> {
    let kind = SchemaKind::Pagination;
    let (request, result) = validate_body::<PaginationRequest>(&state, kind, &body)?;

    Ok(Json(verdict(
        kind,
        request.is_acceptable(),
        result,
        "Pagination Payload Valid",
        "Invalid Pagination Payload",
    )))
}

fn verdict(
    kind: SchemaKind,
    acceptable: bool,
    result: ValidationResult,
    pass: &str,
    fail: &str,
) -> VerdictResponse {
    if acceptable {
        debug!(schema = %kind, "Payload acceptable");
    } else {
        warn!(
            schema = %kind,
            violations = ?result.violations(),
            "Payload not acceptable"
        );
    }

    VerdictResponse {
        message: (if acceptable { pass } else { fail }).to_string(),
        valid: acceptable,
        violations: result.violations().to_vec(),
    }
}
