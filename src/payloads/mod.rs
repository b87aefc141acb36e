//! # Payloads Module
//!
//! Typed request payloads, the schema each one is checked against, and the
//! HTTP handlers that run them:
//! - Account creation and transactions (structural pre-check first)
//! - User accounts (with the email verification gate)
//! - Currency conversion
//! - User verification and pagination (pass/fail verdicts)

pub mod account;
pub mod conversion;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod transaction;
pub mod user_account;
pub mod verification;


pub use routes::payload_routes;
