// src/main.rs
use anyhow::Context;
use axum::{extract::DefaultBodyLimit, extract::Extension, middleware, Router};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod accounts;
mod common;
mod constraints;
mod logging_middleware;
mod payloads;
mod schemas;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::config::{apply_cli_override, log_config_status};
use common::{AppState, ServerConfig};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = apply_cli_override(ServerConfig::from_env());
    log_config_status(&config);

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState::new(config.clone()).context("failed to build payload schemas")?;
    for schema in app_state.schemas.iter() {
        debug!(
            schema = %schema.kind(),
            fields = schema.fields().len(),
            required_keys = schema.structure().map_or(0, |check| check.required().len()),
            "Schema registered"
        );
    }
    info!(schemas = app_state.schemas.len(), "Schemas compiled");

    let app = build_router(Arc::new(app_state));

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

pub(crate) fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        // Payload validation endpoints
        .merge(payloads::payload_routes())
        // Account lookup
        .merge(accounts::accounts_routes())
        // Liveness
        .merge(common::health_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderName::from_static("x-request-id"),
        ])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
