// src/common/health.rs

use axum::{extract::Extension, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub schemas: usize,
}

/// GET /health - Liveness plus the number of compiled schemas
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        schemas: state.schemas.len(),
    })
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
