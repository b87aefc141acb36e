// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod health;
pub mod helpers;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::ApiError;
pub use health::health_routes;
pub use helpers::{redact_secrets, safe_email_log};
pub use state::AppState;
pub use validation::{ValidationResult, Validator, Violation, ViolationKind};
