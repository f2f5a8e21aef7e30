//! Database models for quotes.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use centime_core::market_data::Quote;

use crate::utils::{parse_date_tolerant, parse_decimal_tolerant};

/// Database model for a daily close. One row per (instrument, date).
#[derive(
    Queryable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct QuoteDB {
    pub instrument_id: String,
    pub date: String,
    pub close: String,
}

impl From<QuoteDB> for Quote {
    fn from(db: QuoteDB) -> Self {
        Self {
            instrument_id: db.instrument_id,
            date: parse_date_tolerant(&db.date, "date"),
            close: parse_decimal_tolerant(&db.close, "close"),
        }
    }
}
