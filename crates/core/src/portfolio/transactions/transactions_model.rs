//! Buy/sell transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl std::str::FromStr for TradeSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown trade side: {}",
                other
            ))),
        }
    }
}

/// Domain model for a recorded buy or sell.
///
/// `date` orders transactions for the cost-basis engine; same-day entries
/// keep their insertion order (stable sort).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub instrument_id: String,
    pub date: NaiveDate,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub operation_fee: Decimal,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub instrument_id: String,
    pub date: NaiveDate,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub operation_fee: Decimal,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Rejects malformed numeric input before it can reach the engine,
    /// which does not re-validate.
    pub fn validate(&self) -> Result<()> {
        if self.instrument_id.trim().is_empty() {
            return Err(ValidationError::MissingField("instrumentId".to_string()).into());
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction quantity must be positive".to_string(),
            )
            .into());
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction price must be positive".to_string(),
            )
            .into());
        }
        if self.operation_fee < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Operation fee cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating an existing transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub date: NaiveDate,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub operation_fee: Decimal,
    pub notes: Option<String>,
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction quantity must be positive".to_string(),
            )
            .into());
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction price must be positive".to_string(),
            )
            .into());
        }
        if self.operation_fee < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Operation fee cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
