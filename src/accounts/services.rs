// src/accounts/services.rs
//! Fixed account association table

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No associated accounts found for account ID {0}")]
    NoAssociations(String),
}

#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    associations: HashMap<String, Vec<String>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The directory served in production: "1" and "2" have associations
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_association("1", ["AccountA", "AccountB"])
            .with_association("2", ["AccountC"])
    }

    pub fn with_association<I, S>(mut self, account_id: &str, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.associations.insert(
            account_id.to_string(),
            accounts.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// An id that is unknown, or known with an empty list, is an error
    pub fn associated_accounts(&self, account_id: &str) -> Result<&[String], LookupError> {
        match self.associations.get(account_id) {
            Some(accounts) if !accounts.is_empty() => Ok(accounts),
            _ => Err(LookupError::NoAssociations(account_id.to_string())),
        }
    }
}
