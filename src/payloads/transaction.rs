// src/payloads/transaction.rs

use serde::Deserialize;

use crate::constraints::{Constraint, FieldValue};
use crate::schemas::{Payload, Schema, SchemaError, SchemaKind, StructuralCheck};

pub const REQUIRED_KEYS: &[&str] = &["amount", "sid", "manager", "login", "currency", "comment"];

pub const SUPPORTED_CURRENCIES: &[&str] = &["USD", "EUR", "KES"];

const DIGITS_ONLY: &str = r"^\d+$";

/// `amount` and `sid` are plain numbers: a JSON null there fails the typed
/// parse instead of slipping past the positivity checks.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    pub amount: f64,
    pub sid: i64,
    pub manager: Option<String>,
    pub login: Option<String>,
    pub currency: Option<String>,
    pub comment: Option<String>,
}

impl Payload for TransactionRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "amount" => self.amount.into(),
            "sid" => self.sid.into(),
            "manager" => (&self.manager).into(),
            "login" => (&self.login).into(),
            "currency" => (&self.currency).into(),
            "comment" => (&self.comment).into(),
            _ => FieldValue::Absent,
        }
    }
}

pub fn schema() -> Result<Schema, SchemaError> {
    let kind = SchemaKind::Transaction;
    Ok(Schema::builder(kind)
        .structure(StructuralCheck::new(kind.label(), REQUIRED_KEYS))
        .field("amount", vec![Constraint::greater_than_zero()])
        .field("sid", vec![Constraint::greater_than_zero()])
        .field(
            "manager",
            vec![Constraint::not_blank(), Constraint::pattern(DIGITS_ONLY)?],
        )
        .field(
            "login",
            vec![Constraint::not_blank(), Constraint::pattern(DIGITS_ONLY)?],
        )
        .field(
            "currency",
            vec![
                Constraint::not_blank(),
                Constraint::one_of(SUPPORTED_CURRENCIES, true)
                    .with_message("must be a supported currency"),
            ],
        )
        .field("comment", vec![Constraint::not_blank()])
        .build()?)
}
