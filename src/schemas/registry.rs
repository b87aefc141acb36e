// src/schemas/registry.rs
//! Process-wide set of schemas, one per payload kind.

use super::{Schema, SchemaError, SchemaKind};
use crate::accounts;
use crate::payloads::{account, conversion, pagination, transaction, user_account, verification};

#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    account_creation: Schema,
    transaction: Schema,
    user_account: Schema,
    currency_conversion: Schema,
    user_verification: Schema,
    pagination: Schema,
    account_lookup: Schema,
}

impl SchemaRegistry {
    /// Build every schema. Any failure here is a startup misconfiguration.
    pub fn build() -> Result<Self, SchemaError> {
        let registry = Self {
            account_creation: account::schema()?,
            transaction: transaction::schema()?,
            user_account: user_account::schema()?,
            currency_conversion: conversion::schema()?,
            user_verification: verification::schema()?,
            pagination: pagination::schema()?,
            account_lookup: accounts::validators::schema()?,
        };

        for kind in SchemaKind::ALL {
            if registry.get(kind).kind() != kind {
                return Err(SchemaError::KindMismatch(kind));
            }
        }

        Ok(registry)
    }

    pub fn get(&self, kind: SchemaKind) -> &Schema {
        match kind {
            SchemaKind::AccountCreation => &self.account_creation,
            SchemaKind::Transaction => &self.transaction,
            SchemaKind::UserAccount => &self.user_account,
            SchemaKind::CurrencyConversion => &self.currency_conversion,
            SchemaKind::UserVerification => &self.user_verification,
            SchemaKind::Pagination => &self.pagination,
            SchemaKind::AccountLookup => &self.account_lookup,
        }
    }

    pub fn len(&self) -> usize {
        SchemaKind::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        SchemaKind::ALL.into_iter().map(move |kind| self.get(kind))
    }
}
