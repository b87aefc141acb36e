// src/accounts/handlers.rs

use axum::{extract::Extension, Json};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{info, warn};

use super::models::AccountLookupRequest;
use crate::common::{ApiError, AppState};
use crate::payloads::handlers::{ensure_valid, validate_body};
use crate::schemas::SchemaKind;

/// POST /api/account/getAssociatedAccounts - Validate the id, then look it up
pub async fn get_associated_accounts(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<String>>, ApiError> {
    let kind = SchemaKind::AccountLookup;
    let (request, result) = validate_body::<AccountLookupRequest>(&state, kind, &body)?;
    ensure_valid(kind, result)?;

    let account_id = request.account_id.unwrap_or_default();
    let accounts = state.accounts.associated_accounts(&account_id).map_err(|e| {
        warn!(account_id = %account_id, "Account lookup found no associations");
        ApiError::from(e)
    })?;

    info!(
        account_id = %account_id,
        count = accounts.len(),
        "Associated accounts returned"
    );

    Ok(Json(accounts.to_vec()))
}
