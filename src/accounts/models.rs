// src/accounts/models.rs

use serde::Deserialize;

use crate::constraints::FieldValue;
use crate::schemas::Payload;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLookupRequest {
    pub account_id: Option<String>,
}

impl Payload for AccountLookupRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "accountId" => (&self.account_id).into(),
            _ => FieldValue::Absent,
        }
    }
}
