// src/payloads/models.rs
//! Response bodies for the payload validation endpoints

use serde::Serialize;

use super::conversion::CurrencyConversionRequest;
use crate::common::Violation;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Pass/fail verdict for the raw-JSON endpoints. These answer 200 either way.
#[derive(Debug, Serialize)]
pub struct VerdictResponse {
    pub message: String,
    pub valid: bool,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub message: String,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub amount: Option<f64>,
}

impl From<CurrencyConversionRequest> for ConversionResponse {
    fn from(request: CurrencyConversionRequest) -> Self {
        Self {
            message: request.summary(),
            from_currency: request.from_currency,
            to_currency: request.to_currency,
            amount: request.amount,
        }
    }
}
