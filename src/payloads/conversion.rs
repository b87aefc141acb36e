// src/payloads/conversion.rs

use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, FieldValue};
use crate::schemas::{Payload, Schema, SchemaError, SchemaKind};

const CURRENCY_CODE: &str = r"^[A-Z]{3}$";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversionRequest {
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub amount: Option<f64>,
}

impl CurrencyConversionRequest {
    /// Echo text; a value the client left out reads as `null`
    pub fn summary(&self) -> String {
        format!(
            "Currency conversion requested: {} to {} for amount {}",
            self.from_currency.as_deref().unwrap_or("null"),
            self.to_currency.as_deref().unwrap_or("null"),
            self.amount
                .map_or_else(|| "null".to_string(), |amount| amount.to_string())
        )
    }
}

impl Payload for CurrencyConversionRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "fromCurrency" => (&self.from_currency).into(),
            "toCurrency" => (&self.to_currency).into(),
            "amount" => self.amount.into(),
            _ => FieldValue::Absent,
        }
    }
}

pub fn schema() -> Result<Schema, SchemaError> {
    Ok(Schema::builder(SchemaKind::CurrencyConversion)
        .field(
            "fromCurrency",
            vec![
                Constraint::not_blank(),
                Constraint::pattern(CURRENCY_CODE)?
                    .with_message("fromCurrency must be a valid 3-letter currency code."),
            ],
        )
        .field(
            "toCurrency",
            vec![
                Constraint::not_blank(),
                Constraint::pattern(CURRENCY_CODE)?
                    .with_message("toCurrency must be a valid 3-letter currency code."),
            ],
        )
        .field(
            "amount",
            vec![Constraint::decimal_min(0.01, true).with_message("Amount must be greater than 0.")],
        )
        .build()?)
}
