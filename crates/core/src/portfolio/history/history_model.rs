//! Historical portfolio value models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market_data::Quote;
use crate::portfolio::transactions::Transaction;

/// Portfolio value at one observed price date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// One instrument's inputs to the history reconstruction: its transactions
/// and its valid (close > 0) price observations.
#[derive(Debug, Clone)]
pub struct InstrumentSeries {
    pub transactions: Vec<Transaction>,
    pub quotes: Vec<Quote>,
}
