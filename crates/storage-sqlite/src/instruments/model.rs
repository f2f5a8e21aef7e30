//! Database models for instruments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use centime_core::instruments::Instrument;

use crate::utils::parse_decimal_tolerant;

/// Database model for a tracked stock or ETF. The fee percentage is stored
/// as TEXT to keep exact decimal precision.
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
#[diesel(table_name = crate::schema::instruments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDB {
    pub id: String,
    pub owner: String,
    pub symbol: String,
    pub name: String,
    pub currency: String,
    pub annual_fee_percent: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<InstrumentDB> for Instrument {
    fn from(db: InstrumentDB) -> Self {
        Self {
            id: db.id,
            owner: db.owner,
            symbol: db.symbol,
            name: db.name,
            currency: db.currency,
            annual_fee_percent: parse_decimal_tolerant(
                &db.annual_fee_percent,
                "annual_fee_percent",
            ),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
