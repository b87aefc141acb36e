// src/payloads/verification.rs

use serde::Deserialize;

use crate::constraints::{Constraint, FieldValue};
use crate::schemas::{Payload, Schema, SchemaError, SchemaKind, StructuralCheck};

pub const REQUIRED_KEYS: &[&str] = &["user", "isVerified", "verified"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVerificationRequest {
    pub user: Option<i64>,
    pub is_verified: Option<bool>,
    pub verified: Option<bool>,
}

impl UserVerificationRequest {
    /// Narrow accept check; agrees with the full schema on accept/reject
    pub fn is_acceptable(&self) -> bool {
        matches!(self.user, Some(user) if user > 0)
            && self.is_verified.is_some()
            && self.verified.is_some()
    }
}

impl Payload for UserVerificationRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "user" => self.user.into(),
            "isVerified" => self.is_verified.into(),
            "verified" => self.verified.into(),
            _ => FieldValue::Absent,
        }
    }
}

pub fn schema() -> Result<Schema, SchemaError> {
    let kind = SchemaKind::UserVerification;
    Schema::builder(kind)
        .structure(StructuralCheck::new(kind.label(), REQUIRED_KEYS))
        .field(
            "user",
            vec![Constraint::not_null(), Constraint::greater_than_zero()],
        )
        .field("isVerified", vec![Constraint::not_null()])
        .field("verified", vec![Constraint::not_null()])
        .build()
}
