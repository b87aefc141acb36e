// src/schemas/engine.rs
//! Walks a schema over a payload and collects every violation.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::structure::{parse_document, StructuralError};
use super::{Payload, Schema};
use crate::common::{ValidationResult, Validator, Violation};

/// Evaluate every field constraint, then every cross-field rule.
///
/// Nothing short-circuits: the result holds one violation per failing
/// constraint, in schema declaration order, followed by gate violations.
pub fn evaluate(schema: &Schema, payload: &dyn Payload) -> ValidationResult {
    let mut violations = Vec::new();

    for rule in schema.fields() {
        let value = payload.field(rule.field);
        for constraint in &rule.constraints {
            constraint.evaluate(rule.field, value, &mut violations);
        }
    }

    for rule in schema.cross_field_rules() {
        if (rule.rejects)(payload) {
            debug!(schema = %schema.kind(), rule = rule.name, "Cross-field rule rejected payload");
            violations.push(Violation::gate(rule.field, rule.message));
        }
    }

    ValidationResult::from_violations(violations)
}

impl<P: Payload> Validator<P> for Schema {
    fn validate(&self, data: &P) -> ValidationResult {
        evaluate(self, data)
    }
}

/// Full pipeline for one request body: parse, structural pre-check, typed
/// parse, then constraint evaluation.
///
/// Structural failures come back as `Err` and carry no field violations.
pub fn parse_and_validate<P>(
    schema: &Schema,
    body: &[u8],
) -> Result<(P, ValidationResult), StructuralError>
where
    P: Payload + DeserializeOwned,
{
    let document = parse_document(body)?;

    if let Some(check) = schema.structure() {
        check.check(&document)?;
    }

    let payload: P = serde_json::from_value(document)
        .map_err(|e| StructuralError::FieldType(e.to_string()))?;

    let result = schema.validate(&payload);
    Ok((payload, result))
}
