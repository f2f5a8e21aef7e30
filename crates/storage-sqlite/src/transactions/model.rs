//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use centime_core::portfolio::{TradeSide, Transaction};

use crate::instruments::InstrumentDB;
use crate::utils::{parse_date_tolerant, parse_decimal_tolerant};

/// Database model for a recorded buy or sell. Decimal columns are stored
/// as TEXT; the trade date as `YYYY-MM-DD` TEXT.
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
#[diesel(belongs_to(InstrumentDB, foreign_key = instrument_id))]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub instrument_id: String,
    pub date: String,
    pub side: String,
    pub quantity: String,
    pub price: String,
    pub operation_fee: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        let side = db.side.parse::<TradeSide>().unwrap_or_else(|e| {
            log::error!("Bad side '{}' on transaction {}: {}", db.side, db.id, e);
            TradeSide::Buy
        });
        Self {
            id: db.id,
            instrument_id: db.instrument_id,
            date: parse_date_tolerant(&db.date, "date"),
            side,
            quantity: parse_decimal_tolerant(&db.quantity, "quantity"),
            price: parse_decimal_tolerant(&db.price, "price"),
            operation_fee: parse_decimal_tolerant(&db.operation_fee, "operation_fee"),
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}
