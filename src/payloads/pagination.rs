// src/payloads/pagination.rs

use serde::Deserialize;

use crate::constraints::{Constraint, FieldValue};
use crate::schemas::{Payload, Schema, SchemaError, SchemaKind, StructuralCheck};

pub const REQUIRED_KEYS: &[&str] = &["fromUserId", "limit", "offset"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    pub from_user_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationRequest {
    /// Narrow accept check; agrees with the full schema on accept/reject
    pub fn is_acceptable(&self) -> bool {
        matches!(self.from_user_id, Some(id) if id > 0)
            && matches!(self.limit, Some(limit) if limit > 0)
            && matches!(self.offset, Some(offset) if offset >= 0)
    }
}

impl Payload for PaginationRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "fromUserId" => self.from_user_id.into(),
            "limit" => self.limit.into(),
            "offset" => self.offset.into(),
            _ => FieldValue::Absent,
        }
    }
}

pub fn schema() -> Result<Schema, SchemaError> {
    let kind = SchemaKind::Pagination;
    Schema::builder(kind)
        .structure(StructuralCheck::new(kind.label(), REQUIRED_KEYS))
        .field(
            "fromUserId",
            vec![Constraint::not_null(), Constraint::greater_than_zero()],
        )
        .field(
            "limit",
            vec![Constraint::not_null(), Constraint::greater_than_zero()],
        )
        .field(
            "offset",
            vec![Constraint::not_null(), Constraint::positive_or_zero()],
        )
        .build()
}
