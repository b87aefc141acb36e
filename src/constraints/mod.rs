//! # Constraint Primitives
//!
//! Reusable field-level checks. A [`Constraint`] pairs one [`Check`] with the
//! message reported when it fails, and is evaluated against a [`FieldValue`]
//! borrowed from a typed payload.
//!
//! Absent values pass every check except `NotNull` and `NotBlank`. Format
//! checks (pattern, set membership, email) also pass blank strings, leaving
//! blankness to `NotBlank` so a blank field is reported once.

use regex::Regex;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::common::Violation;

#[cfg(test)]
mod tests;

const EMAIL_PATTERN: &str = r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$"#;

#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single field value as seen by the constraint primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Map(&'a BTreeMap<String, String>),
}

impl<'a> FieldValue<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Int(n) => Some(n as f64),
            FieldValue::Float(n) => Some(n),
            _ => None,
        }
    }

    /// The string value, unless it is absent or blank
    fn as_filled_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Str(s) if !is_blank(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(FieldValue::Absent, FieldValue::Str)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Int)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Float)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Bool)
    }
}

impl<'a> From<&'a Option<BTreeMap<String, String>>> for FieldValue<'a> {
    fn from(value: &'a Option<BTreeMap<String, String>>) -> Self {
        value.as_ref().map_or(FieldValue::Absent, FieldValue::Map)
    }
}

/// The predicate half of a constraint
#[derive(Debug, Clone)]
pub enum Check {
    NotNull,
    NotBlank,
    Pattern(Regex),
    PositiveOrZero,
    GreaterThanZero,
    DecimalMin { bound: f64, inclusive: bool },
    OneOf {
        allowed: BTreeSet<String>,
        case_insensitive: bool,
    },
    Email(Regex),
    EntriesNotBlank {
        key_message: Cow<'static, str>,
        value_message: Cow<'static, str>,
    },
}

#[derive(Debug, Clone)]
pub struct Constraint {
    check: Check,
    message: Cow<'static, str>,
}

impl Constraint {
    pub fn not_null() -> Self {
        Self::new(Check::NotNull, "must not be null")
    }

    pub fn not_blank() -> Self {
        Self::new(Check::NotBlank, "must not be blank")
    }

    /// Full-match pattern: the expression is anchored at both ends even if
    /// the caller left the anchors out.
    pub fn pattern(expr: &str) -> Result<Self, ConstraintError> {
        let anchored = format!("^(?:{})$", expr);
        let regex = Regex::new(&anchored).map_err(|source| ConstraintError::InvalidPattern {
            pattern: expr.to_string(),
            source,
        })?;
        Ok(Self::new(Check::Pattern(regex), "must match"))
    }

    pub fn positive_or_zero() -> Self {
        Self::new(Check::PositiveOrZero, "must be greater than or equal to 0")
    }

    pub fn greater_than_zero() -> Self {
        Self::new(Check::GreaterThanZero, "must be greater than 0")
    }

    pub fn decimal_min(bound: f64, inclusive: bool) -> Self {
        let message = if inclusive {
            format!("must be greater than or equal to {}", bound)
        } else {
            format!("must be greater than {}", bound)
        };
        Self::new(Check::DecimalMin { bound, inclusive }, message)
    }

    pub fn one_of(allowed: &[&str], case_insensitive: bool) -> Self {
        let allowed: BTreeSet<String> = allowed
            .iter()
            .map(|v| {
                if case_insensitive {
                    v.to_uppercase()
                } else {
                    v.to_string()
                }
            })
            .collect();
        let message = format!(
            "must be one of [{}]",
            allowed.iter().cloned().collect::<Vec<_>>().join(", ")
        );
        Self::new(
            Check::OneOf {
                allowed,
                case_insensitive,
            },
            message,
        )
    }

    pub fn email() -> Result<Self, ConstraintError> {
        let regex = Regex::new(EMAIL_PATTERN).map_err(|source| ConstraintError::InvalidPattern {
            pattern: EMAIL_PATTERN.to_string(),
            source,
        })?;
        Ok(Self::new(
            Check::Email(regex),
            "must be a well-formed email address",
        ))
    }

    pub fn entries_not_blank(
        key_message: impl Into<Cow<'static, str>>,
        value_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(
            Check::EntriesNotBlank {
                key_message: key_message.into(),
                value_message: value_message.into(),
            },
            "must not contain blank entries",
        )
    }

    /// Replace the default failure message
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(check: Check, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    /// Whether the value satisfies this constraint
    pub fn passes(&self, value: FieldValue<'_>) -> bool {
        match &self.check {
            Check::NotNull => !value.is_absent(),
            Check::NotBlank => match value {
                FieldValue::Absent => false,
                FieldValue::Str(s) => !is_blank(s),
                _ => true,
            },
            Check::Pattern(regex) => value.as_filled_str().map_or(true, |s| regex.is_match(s)),
            Check::PositiveOrZero => value.as_number().map_or(true, |n| n >= 0.0),
            Check::GreaterThanZero => value.as_number().map_or(true, |n| n > 0.0),
            Check::DecimalMin { bound, inclusive } => value.as_number().map_or(true, |n| {
                if *inclusive {
                    n >= *bound
                } else {
                    n > *bound
                }
            }),
            Check::OneOf {
                allowed,
                case_insensitive,
            } => value.as_filled_str().map_or(true, |s| {
                if *case_insensitive {
                    allowed.contains(&s.to_uppercase())
                } else {
                    allowed.contains(s)
                }
            }),
            Check::Email(regex) => value.as_filled_str().map_or(true, |s| regex.is_match(s)),
            Check::EntriesNotBlank { .. } => match value {
                FieldValue::Map(map) => map.iter().all(|(k, v)| !is_blank(k) && !is_blank(v)),
                _ => true,
            },
        }
    }

    /// Evaluate against `value`, pushing one violation per failure into `out`.
    ///
    /// Map checks report each blank key or value at `field.<key>`; every other
    /// check reports at most one violation at `field`.
    pub fn evaluate(&self, field: &str, value: FieldValue<'_>, out: &mut Vec<Violation>) {
        if let (
            Check::EntriesNotBlank {
                key_message,
                value_message,
            },
            FieldValue::Map(map),
        ) = (&self.check, value)
        {
            for (key, entry) in map {
                let path = format!("{}.{}", field, key);
                if is_blank(key) {
                    out.push(Violation::field(path.clone(), key_message.clone()));
                }
                if is_blank(entry) {
                    out.push(Violation::field(path, value_message.clone()));
                }
            }
            return;
        }

        if !self.passes(value) {
            out.push(Violation::field(field, self.message.clone()));
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
