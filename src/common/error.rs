// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{ValidationResult, Violation};
use crate::accounts::services::LookupError;
use crate::schemas::StructuralError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    MalformedJson(String),
    InvalidStructure(String),
    InvalidFieldType(String),
    ValidationError(Vec<Violation>),
    GateRejected(String),
    NoAssociatedAccounts(String),
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedJson(msg) => write!(f, "Malformed JSON: {}", msg),
            ApiError::InvalidStructure(msg) => write!(f, "Invalid Structure: {}", msg),
            ApiError::InvalidFieldType(msg) => write!(f, "Invalid Field Type: {}", msg),
            ApiError::ValidationError(violations) => {
                write!(f, "Validation Error: {}", summarize(violations))
            }
            ApiError::GateRejected(msg) => write!(f, "Rejected: {}", msg),
            ApiError::NoAssociatedAccounts(msg) => write!(f, "Lookup Failed: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, violations) = match self {
            ApiError::MalformedJson(msg) => {
                (StatusCode::BAD_REQUEST, msg, "MALFORMED_JSON", Vec::new())
            }
            ApiError::InvalidStructure(msg) => {
                (StatusCode::BAD_REQUEST, msg, "INVALID_STRUCTURE", Vec::new())
            }
            ApiError::InvalidFieldType(msg) => {
                (StatusCode::BAD_REQUEST, msg, "INVALID_FIELD_TYPE", Vec::new())
            }
            ApiError::ValidationError(violations) => (
                StatusCode::BAD_REQUEST,
                summarize(&violations),
                "VALIDATION_ERROR",
                violations,
            ),
            ApiError::GateRejected(msg) => {
                (StatusCode::BAD_REQUEST, msg, "GATE_REJECTED", Vec::new())
            }
            ApiError::NoAssociatedAccounts(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "NO_ASSOCIATED_ACCOUNTS",
                Vec::new(),
            ),
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    "INTERNAL_SERVER_ERROR",
                    Vec::new(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            violations,
        };

        (status, Json(error_response)).into_response()
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Field violations win over gate violations: a payload with broken fields is
/// reported as a validation error listing everything, and only a payload whose
/// fields all pass gets the gate's own message.
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid() {
            return ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            );
        }

        if result.field_violations().next().is_none() {
            let message = result
                .gate_violations()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            return ApiError::GateRejected(message);
        }

        ApiError::ValidationError(result.violations().to_vec())
    }
}

impl From<StructuralError> for ApiError {
    fn from(err: StructuralError) -> Self {
        match err {
            StructuralError::MalformedJson(_) => ApiError::MalformedJson(err.to_string()),
            StructuralError::FieldType(_) => ApiError::InvalidFieldType(err.to_string()),
            StructuralError::NotAnObject { .. }
            | StructuralError::MissingKeys { .. }
            | StructuralError::WrongShape { .. } => ApiError::InvalidStructure(err.to_string()),
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NoAssociations(_) => ApiError::NoAssociatedAccounts(err.to_string()),
        }
    }
}
