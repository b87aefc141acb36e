// src/accounts/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the account lookup router
pub fn accounts_routes() -> Router {
    Router::new().route(
        "/api/account/getAssociatedAccounts",
        post(handlers::get_associated_accounts),
    )
}
