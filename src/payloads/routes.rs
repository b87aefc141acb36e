// src/payloads/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the payload validation router
pub fn payload_routes() -> Router {
    Router::new()
        // Typed payloads: field violations come back as 400
        .route("/api/validate", post(handlers::validate_account_creation))
        .route(
            "/api/validate/transaction",
            post(handlers::validate_transaction),
        )
        .route("/api/validate/create", post(handlers::create_user_account))
        .route("/api/convert", post(handlers::convert_currency))
        // Raw-JSON payloads: 400 only for structure, otherwise a 200 verdict
        .route(
            "/api/validate/user",
            post(handlers::validate_user_verification),
        )
        .route(
            "/api/validate/pagination",
            post(handlers::validate_pagination),
        )
}
