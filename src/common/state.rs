// Application state shared across all modules

use std::sync::Arc;

use super::config::ServerConfig;
use crate::accounts::services::AccountDirectory;
use crate::schemas::{SchemaError, SchemaRegistry};

/// Compiled schemas, the account directory and configuration. Built once at
/// startup and read-only afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub schemas: Arc<SchemaRegistry>,
    pub accounts: Arc<AccountDirectory>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, SchemaError> {
        Ok(Self {
            schemas: Arc::new(SchemaRegistry::build()?),
            accounts: Arc::new(AccountDirectory::with_fixtures()),
            config,
        })
    }
}
