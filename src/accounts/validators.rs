// src/accounts/validators.rs

use crate::constraints::Constraint;
use crate::schemas::{Schema, SchemaError, SchemaKind};

pub fn schema() -> Result<Schema, SchemaError> {
    Ok(Schema::builder(SchemaKind::AccountLookup)
        .field(
            "accountId",
            vec![
                Constraint::not_blank(),
                Constraint::pattern(r"^\d+$")?.with_message("Account ID must be a numeric string."),
            ],
        )
        .build()?)
}
