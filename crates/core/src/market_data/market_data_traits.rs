//! Quote store traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::market_data_model::{NewQuote, Quote};
use crate::errors::Result;

/// Trait defining the contract for quote persistence.
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Upserts a batch of quotes for one instrument (one row per date).
    async fn upsert_batch(&self, instrument_id: &str, quotes: Vec<NewQuote>) -> Result<usize>;

    /// Lists quotes for one instrument within `[from, to]`, date ascending.
    fn list_range(
        &self,
        instrument_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Quote>>;

    /// Latest known close for one instrument, if any.
    fn latest_close(&self, instrument_id: &str) -> Result<Option<Decimal>>;
}
