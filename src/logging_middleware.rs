// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::{to_bytes, HttpBody};
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::common::redact_secrets;

/// Request bodies above this size, or of unknown size, pass through unlogged
pub const MAX_LOGGED_BODY_BYTES: u64 = 16 * 1024;

/// Middleware to log request and response bodies in debug mode.
///
/// Passwords are masked before a body reaches the log. Size limits are left
/// to `DefaultBodyLimit`; this layer never rejects a request.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !should_buffer(request.body()) {
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            "📥 Request (body not logged)"
        );
        return log_response(next.run(request).await).await;
    }

    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX).await.map_err(|e| {
        warn!(
            method = %parts.method,
            uri = %parts.uri,
            error = %e,
            "Failed to read request body"
        );
        StatusCode::BAD_REQUEST
    })?;

    if !bytes.is_empty() {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            request_body = %loggable_body(&bytes),
            "📥 Request"
        );
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    log_response(next.run(request).await).await
}

async fn log_response(response: Response) -> Result<Response, StatusCode> {
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        debug!(
            status = %parts.status,
            response_body = %loggable_body(&bytes),
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Only bodies with a known, small size are buffered for logging
fn should_buffer(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|upper| upper <= MAX_LOGGED_BODY_BYTES)
}

/// Pretty JSON with secrets masked, raw text otherwise
fn loggable_body(bytes: &[u8]) -> String {
    let Ok(text) = std::str::from_utf8(bytes) else {
        return format!("<{} bytes of binary data>", bytes.len());
    };

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(mut json) => {
            redact_secrets(&mut json);
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string())
        }
        Err(_) => text.to_string(),
    }
}
