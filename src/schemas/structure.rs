// src/schemas/structure.rs
//! Structural pre-check on the raw JSON document, run before typed parsing.
//! A failure here is reported on its own; field constraints never run.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl JsonShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonShape::Object,
            Value::Array(_) => JsonShape::Array,
            Value::String(_) => JsonShape::String,
            Value::Number(_) => JsonShape::Number,
            Value::Bool(_) => JsonShape::Bool,
            Value::Null => JsonShape::Null,
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonShape::Object => "object",
            JsonShape::Array => "array",
            JsonShape::String => "string",
            JsonShape::Number => "number",
            JsonShape::Bool => "boolean",
            JsonShape::Null => "null",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    /// The body is not parseable JSON
    #[error("Failed to parse JSON: {0}")]
    MalformedJson(String),

    #[error("Invalid {payload} structure.")]
    NotAnObject {
        payload: &'static str,
        found: JsonShape,
    },

    #[error("Invalid {payload} structure.")]
    MissingKeys {
        payload: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("Invalid {payload} structure.")]
    WrongShape {
        payload: &'static str,
        field: &'static str,
        expected: JsonShape,
        found: JsonShape,
    },

    /// Well-formed JSON whose values do not fit the typed payload
    #[error("Invalid JSON data: {0}")]
    FieldType(String),
}

impl StructuralError {
    /// Detail for logs; the display message is kept short for clients
    pub fn detail(&self) -> String {
        match self {
            StructuralError::NotAnObject { found, .. } => {
                format!("expected a JSON object, found {}", found)
            }
            StructuralError::MissingKeys { missing, .. } => {
                format!("missing keys: {}", missing.join(", "))
            }
            StructuralError::WrongShape {
                field,
                expected,
                found,
                ..
            } => format!("`{}` must be {}, found {}", field, expected, found),
            other => other.to_string(),
        }
    }
}

/// Parse the raw request body into an untyped JSON tree
pub fn parse_document(body: &[u8]) -> Result<Value, StructuralError> {
    serde_json::from_slice(body).map_err(|e| StructuralError::MalformedJson(e.to_string()))
}

/// Required top-level keys plus shape expectations for some of them
#[derive(Debug, Clone)]
pub struct StructuralCheck {
    payload: &'static str,
    required: &'static [&'static str],
    shapes: Vec<(&'static str, JsonShape)>,
}

impl StructuralCheck {
    pub fn new(payload: &'static str, required: &'static [&'static str]) -> Self {
        Self {
            payload,
            required,
            shapes: Vec::new(),
        }
    }

    /// When `field` is present and not null it must have this shape
    pub fn expect_shape(mut self, field: &'static str, shape: JsonShape) -> Self {
        self.shapes.push((field, shape));
        self
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn check(&self, document: &Value) -> Result<(), StructuralError> {
        let object = self.as_object(document)?;

        let missing: Vec<&'static str> = self
            .required
            .iter()
            .copied()
            .filter(|key| !object.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(StructuralError::MissingKeys {
                payload: self.payload,
                missing,
            });
        }

        for &(field, expected) in &self.shapes {
            if let Some(value) = object.get(field).filter(|v| !v.is_null()) {
                let found = JsonShape::of(value);
                if found != expected {
                    return Err(StructuralError::WrongShape {
                        payload: self.payload,
                        field,
                        expected,
                        found,
                    });
                }
            }
        }

        Ok(())
    }

    fn as_object<'a>(&self, document: &'a Value) -> Result<&'a Map<String, Value>, StructuralError> {
        document.as_object().ok_or(StructuralError::NotAnObject {
            payload: self.payload,
            found: JsonShape::of(document),
        })
    }
}
