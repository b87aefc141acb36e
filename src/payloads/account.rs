// src/payloads/account.rs

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::constraints::{Constraint, FieldValue};
use crate::schemas::{JsonShape, Payload, Schema, SchemaError, SchemaKind, StructuralCheck};

/// Keys that must all be present in the raw document
pub const REQUIRED_KEYS: &[&str] = &[
    "user",
    "password",
    "sid",
    "groupName",
    "leverage",
    "initialBalance",
    "notifyDisable",
    "readOnly",
    "customFields",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreationRequest {
    pub user: Option<i64>,
    pub password: Option<String>,
    pub sid: Option<i64>,
    pub group_name: Option<String>,
    pub leverage: Option<i64>,
    pub initial_balance: Option<i64>,
    pub notify_disable: Option<bool>,
    pub read_only: Option<bool>,
    pub custom_fields: Option<BTreeMap<String, String>>,
}

impl Payload for AccountCreationRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "user" => self.user.into(),
            "password" => (&self.password).into(),
            "sid" => self.sid.into(),
            "groupName" => (&self.group_name).into(),
            "leverage" => self.leverage.into(),
            "initialBalance" => self.initial_balance.into(),
            "notifyDisable" => self.notify_disable.into(),
            "readOnly" => self.read_only.into(),
            "customFields" => (&self.custom_fields).into(),
            _ => FieldValue::Absent,
        }
    }
}

pub fn schema() -> Result<Schema, SchemaError> {
    let kind = SchemaKind::AccountCreation;
    Schema::builder(kind)
        .structure(
            StructuralCheck::new(kind.label(), REQUIRED_KEYS)
                .expect_shape("customFields", JsonShape::Object),
        )
        .field("user", vec![Constraint::not_null()])
        .field("password", vec![Constraint::not_blank()])
        .field("sid", vec![Constraint::not_null()])
        .field("groupName", vec![Constraint::not_blank()])
        .field(
            "initialBalance",
            vec![
                Constraint::not_null().with_message("Initial balance cannot be null"),
                Constraint::positive_or_zero()
                    .with_message("Initial balance must be zero or positive"),
            ],
        )
        .field(
            "customFields",
            vec![
                Constraint::not_null().with_message("Custom fields cannot be null"),
                Constraint::entries_not_blank(
                    "Custom field key cannot be blank",
                    "Custom field value cannot be blank",
                ),
            ],
        )
        .build()
}
