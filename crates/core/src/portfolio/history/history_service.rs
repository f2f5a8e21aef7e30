use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::history_calculator::reconstruct_portfolio_history;
use super::history_model::{InstrumentSeries, PortfolioValuePoint};
use crate::errors::{CalculatorError, Result};
use crate::instruments::InstrumentRepositoryTrait;
use crate::market_data::{Quote, QuoteRepositoryTrait};
use crate::portfolio::transactions::TransactionRepositoryTrait;

/// Cache key for a fetched price series.
type SeriesKey = (String, NaiveDate, NaiveDate);

/// Trait defining the contract for portfolio history operations.
pub trait HistoryServiceTrait: Send + Sync {
    /// Reconstructs the portfolio value series for `[from, to]`.
    fn get_portfolio_history(
        &self,
        owner: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PortfolioValuePoint>>;

    /// Drops cached price series for one instrument. Called fire-and-forget
    /// after mutations; concurrent readers may observe stale data until the
    /// invalidation completes.
    fn invalidate_instrument(&self, instrument_id: &str);
}

/// Service reconstructing historical portfolio values, with a read-through
/// cache over fetched price series (no eviction policy).
pub struct HistoryService {
    instrument_repository: Arc<dyn InstrumentRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
    series_cache: RwLock<HashMap<SeriesKey, Arc<Vec<Quote>>>>,
}

impl HistoryService {
    pub fn new(
        instrument_repository: Arc<dyn InstrumentRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        quote_repository: Arc<dyn QuoteRepositoryTrait>,
    ) -> Self {
        Self {
            instrument_repository,
            transaction_repository,
            quote_repository,
            series_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetches the valid price series for one instrument, read-through.
    fn cached_series(
        &self,
        instrument_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Arc<Vec<Quote>>> {
        let key = (instrument_id.to_string(), from, to);

        if let Some(series) = self.series_cache.read().unwrap().get(&key) {
            return Ok(series.clone());
        }

        let fetched: Vec<Quote> = self
            .quote_repository
            .list_range(instrument_id, from, to)?
            .into_iter()
            // Non-positive closes are invalid and must never reach the engine.
            .filter(|q| q.close > Decimal::ZERO)
            .collect();
        let series = Arc::new(fetched);
        self.series_cache
            .write()
            .unwrap()
            .insert(key, series.clone());
        Ok(series)
    }
}

impl HistoryServiceTrait for HistoryService {
    fn get_portfolio_history(
        &self,
        owner: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PortfolioValuePoint>> {
        if from > to {
            return Err(CalculatorError::InvalidDateRange(format!(
                "{} is after {}",
                from, to
            ))
            .into());
        }

        let instruments = self.instrument_repository.list(owner)?;
        debug!(
            "Reconstructing portfolio history {}..{} over {} instruments for {}",
            from,
            to,
            instruments.len(),
            owner
        );

        let mut series = Vec::with_capacity(instruments.len());
        for instrument in &instruments {
            let transactions = self
                .transaction_repository
                .list_by_instrument(owner, &instrument.id)?;
            let quotes = self.cached_series(&instrument.id, from, to)?;
            series.push(InstrumentSeries {
                transactions,
                quotes: quotes.as_ref().clone(),
            });
        }

        Ok(reconstruct_portfolio_history(&series))
    }

    fn invalidate_instrument(&self, instrument_id: &str) {
        let mut cache = self.series_cache.write().unwrap();
        cache.retain(|(id, _, _), _| id != instrument_id);
    }
}
