//! # Schemas Module
//!
//! A schema is data: an ordered list of field rules (field name plus its
//! constraints), zero or more cross-field rules, and an optional structural
//! pre-check on the raw JSON document. Schemas are built once at startup by
//! [`SchemaRegistry::build`] and shared read-only afterwards.

pub mod engine;
pub mod registry;
pub mod structure;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::constraints::{Constraint, ConstraintError, FieldValue};

pub use engine::{evaluate, parse_and_validate};
pub use registry::SchemaRegistry;
pub use structure::{JsonShape, StructuralCheck, StructuralError};

/// A typed payload whose fields can be looked up by their wire name
pub trait Payload {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaKind {
    AccountCreation,
    Transaction,
    UserAccount,
    CurrencyConversion,
    UserVerification,
    Pagination,
    AccountLookup,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 7] = [
        SchemaKind::AccountCreation,
        SchemaKind::Transaction,
        SchemaKind::UserAccount,
        SchemaKind::CurrencyConversion,
        SchemaKind::UserVerification,
        SchemaKind::Pagination,
        SchemaKind::AccountLookup,
    ];

    /// Human-readable payload name, used in structural error messages
    pub fn label(&self) -> &'static str {
        match self {
            SchemaKind::AccountCreation => "Account Creation Payload",
            SchemaKind::Transaction => "Transaction Payload",
            SchemaKind::UserAccount => "User Account Payload",
            SchemaKind::CurrencyConversion => "Currency Conversion Payload",
            SchemaKind::UserVerification => "User Verification Payload",
            SchemaKind::Pagination => "Pagination Payload",
            SchemaKind::AccountLookup => "Account Lookup Payload",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error("{schema}: field `{field}` is declared twice")]
    DuplicateField {
        schema: SchemaKind,
        field: &'static str,
    },
    #[error("{schema}: schema declares no fields")]
    Empty { schema: SchemaKind },
    #[error("{0} is registered under the wrong kind")]
    KindMismatch(SchemaKind),
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraints: Vec<Constraint>,
}

/// A predicate over the whole payload. `rejects` returns true when the
/// payload must be refused; the violation is attributed to `field`.
#[derive(Clone)]
pub struct CrossFieldRule {
    pub name: &'static str,
    pub field: &'static str,
    pub message: &'static str,
    pub rejects: fn(&dyn Payload) -> bool,
}

impl fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Schema {
    kind: SchemaKind,
    fields: Vec<FieldRule>,
    cross_field_rules: Vec<CrossFieldRule>,
    structure: Option<StructuralCheck>,
}

impl Schema {
    pub fn builder(kind: SchemaKind) -> SchemaBuilder {
        SchemaBuilder {
            kind,
            fields: Vec::new(),
            cross_field_rules: Vec::new(),
            structure: None,
        }
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    pub fn cross_field_rules(&self) -> &[CrossFieldRule] {
        &self.cross_field_rules
    }

    pub fn structure(&self) -> Option<&StructuralCheck> {
        self.structure.as_ref()
    }
}

/// Collects field rules in declaration order
pub struct SchemaBuilder {
    kind: SchemaKind,
    fields: Vec<FieldRule>,
    cross_field_rules: Vec<CrossFieldRule>,
    structure: Option<StructuralCheck>,
}

impl SchemaBuilder {
    pub fn field(mut self, field: &'static str, constraints: Vec<Constraint>) -> Self {
        self.fields.push(FieldRule { field, constraints });
        self
    }

    pub fn cross_field(mut self, rule: CrossFieldRule) -> Self {
        self.cross_field_rules.push(rule);
        self
    }

    pub fn structure(mut self, check: StructuralCheck) -> Self {
        self.structure = Some(check);
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::Empty { schema: self.kind });
        }

        let mut seen = HashSet::new();
        for rule in &self.fields {
            if !seen.insert(rule.field) {
                return Err(SchemaError::DuplicateField {
                    schema: self.kind,
                    field: rule.field,
                });
            }
        }

        Ok(Schema {
            kind: self.kind,
            fields: self.fields,
            cross_field_rules: self.cross_field_rules,
            structure: self.structure,
        })
    }
}
