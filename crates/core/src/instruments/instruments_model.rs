//! Instrument (stock/ETF) domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model for a tracked stock or ETF.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: String,
    pub owner: String,
    pub symbol: String,
    pub name: String,
    pub currency: String,
    /// Annual holding fee (TER) in percent; `0` disables fee accrual.
    pub annual_fee_percent: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstrument {
    pub symbol: String,
    pub name: String,
    pub currency: String,
    #[serde(default)]
    pub annual_fee_percent: Decimal,
}

impl NewInstrument {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.annual_fee_percent < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Annual fee percent cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating an existing instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentUpdate {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub annual_fee_percent: Decimal,
}

impl InstrumentUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.annual_fee_percent < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Annual fee percent cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
