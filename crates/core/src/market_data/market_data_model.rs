//! Price observation models.
//!
//! Quotes arrive through the API; the live fetch integration is treated as
//! an external collaborator. A point with a non-positive close is invalid:
//! ingestion rejects it, and the history service filters again before the
//! engines run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A daily close observation for one instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub instrument_id: String,
    pub date: NaiveDate,
    pub close: Decimal,
}

/// Input model for ingesting quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl NewQuote {
    pub fn validate(&self) -> Result<()> {
        if self.close <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Quote close must be positive, got {} on {}",
                self.close, self.date
            ))
            .into());
        }
        Ok(())
    }
}
