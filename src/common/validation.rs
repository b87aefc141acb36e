// Common validation types and traits

use serde::Serialize;

/// What produced a violation: a single-field constraint or a cross-field gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Field,
    Gate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
    #[serde(skip)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind: ViolationKind::Field,
        }
    }

    pub fn gate(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind: ViolationKind::Gate,
        }
    }
}

/// Outcome of validating one payload. `Invalid` never carries an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }

    /// Violations raised by per-field constraints only
    pub fn field_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations()
            .iter()
            .filter(|v| v.kind == ViolationKind::Field)
    }

    /// Violations raised by cross-field gates only
    pub fn gate_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations()
            .iter()
            .filter(|v| v.kind == ViolationKind::Gate)
    }
}

pub trait Validator<T: ?Sized> {
    fn validate(&self, data: &T) -> ValidationResult;
}
