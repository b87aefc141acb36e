//! # Accounts Module
//!
//! Looks up the accounts associated with a numeric account id. The id is
//! validated like any other payload before the directory is consulted.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::accounts_routes;
