//! Database models for shared-expense sheets.
//!
//! Participant lists and interaction shares are small bounded arrays, so
//! they are stored as JSON TEXT instead of join tables.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use centime_core::splits::{Interaction, InteractionShare, SplitSheet};

use crate::utils::parse_date_tolerant;

/// Database model for a sheet.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::split_sheets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SplitSheetDB {
    pub id: String,
    pub owner: String,
    pub name: String,
    /// JSON array of participant names.
    pub participants: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for an interaction.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(SplitSheetDB, foreign_key = sheet_id))]
#[diesel(table_name = crate::schema::interactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InteractionDB {
    pub id: String,
    pub sheet_id: String,
    pub label: String,
    pub payer: String,
    pub amount_cents: i64,
    pub date: String,
    pub is_refunded: bool,
    /// JSON array of `{participant, owedCents}` objects.
    pub shares: String,
    pub created_at: NaiveDateTime,
}

fn parse_json_tolerant<T: serde::de::DeserializeOwned + Default>(
    value_str: &str,
    field_name: &str,
) -> T {
    serde_json::from_str(value_str).unwrap_or_else(|e| {
        log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
        T::default()
    })
}

impl From<SplitSheetDB> for SplitSheet {
    fn from(db: SplitSheetDB) -> Self {
        Self {
            id: db.id,
            owner: db.owner,
            name: db.name,
            participants: parse_json_tolerant(&db.participants, "participants"),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<InteractionDB> for Interaction {
    fn from(db: InteractionDB) -> Self {
        Self {
            id: db.id,
            sheet_id: db.sheet_id,
            label: db.label,
            payer: db.payer,
            amount_cents: db.amount_cents,
            date: parse_date_tolerant(&db.date, "date"),
            is_refunded: db.is_refunded,
            shares: parse_json_tolerant::<Vec<InteractionShare>>(&db.shares, "shares"),
            created_at: db.created_at,
        }
    }
}
