// src/payloads/user_account.rs

use serde::Deserialize;

use crate::constraints::{Constraint, FieldValue};
use crate::schemas::{CrossFieldRule, Payload, Schema, SchemaError, SchemaKind};

pub const EMAIL_NOT_VERIFIED: &str = "Email must be verified to complete registration.";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub client_type: Option<String>,
    pub email_verified: Option<bool>,
}

impl Payload for UserAccountRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "firstName" => (&self.first_name).into(),
            "lastName" => (&self.last_name).into(),
            "middleName" => (&self.middle_name).into(),
            "country" => (&self.country).into(),
            "phone" => (&self.phone).into(),
            "email" => (&self.email).into(),
            "clientType" => (&self.client_type).into(),
            "emailVerified" => self.email_verified.into(),
            _ => FieldValue::Absent,
        }
    }
}

/// Present and false rejects; absent or true passes
fn email_not_verified(payload: &dyn Payload) -> bool {
    matches!(payload.field("emailVerified"), FieldValue::Bool(false))
}

pub fn schema() -> Result<Schema, SchemaError> {
    Ok(Schema::builder(SchemaKind::UserAccount)
        .field("firstName", vec![Constraint::not_blank()])
        .field("lastName", vec![Constraint::not_blank()])
        .field(
            "country",
            vec![Constraint::not_blank(), Constraint::pattern(r"^[A-Z]{2}$")?],
        )
        .field(
            "phone",
            vec![Constraint::not_blank(), Constraint::pattern(r"^\+\d{1,15}$")?],
        )
        .field("email", vec![Constraint::not_blank(), Constraint::email()?])
        .field("clientType", vec![Constraint::not_blank()])
        .cross_field(CrossFieldRule {
            name: "email_verification_gate",
            field: "emailVerified",
            message: EMAIL_NOT_VERIFIED,
            rejects: email_not_verified,
        })
        .build()?)
}
