use chrono::{DateTime, Utc};
use log::debug;
use std::sync::Arc;

use super::summary_model::{InstrumentPnl, PnlSummary};
use crate::errors::Result;
use crate::instruments::{Instrument, InstrumentRepositoryTrait};
use crate::market_data::QuoteRepositoryTrait;
use crate::portfolio::position::compute_position;
use crate::portfolio::transactions::TransactionRepositoryTrait;

/// Trait defining the contract for P&L summary operations.
pub trait SummaryServiceTrait: Send + Sync {
    /// P&L of a single instrument as of now.
    fn get_instrument_pnl(&self, owner: &str, instrument_id: &str) -> Result<InstrumentPnl>;

    /// Portfolio-wide summary: the engine is invoked independently per
    /// instrument and the results are summed.
    fn get_portfolio_summary(&self, owner: &str) -> Result<PnlSummary>;
}

/// Service computing per-instrument and portfolio-wide P&L.
pub struct SummaryService {
    instrument_repository: Arc<dyn InstrumentRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
}

impl SummaryService {
    pub fn new(
        instrument_repository: Arc<dyn InstrumentRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        quote_repository: Arc<dyn QuoteRepositoryTrait>,
    ) -> Self {
        Self {
            instrument_repository,
            transaction_repository,
            quote_repository,
        }
    }

    fn instrument_pnl_as_of(
        &self,
        owner: &str,
        instrument: &Instrument,
        as_of: DateTime<Utc>,
    ) -> Result<InstrumentPnl> {
        let transactions = self
            .transaction_repository
            .list_by_instrument(owner, &instrument.id)?;
        let current_price = self.quote_repository.latest_close(&instrument.id)?;

        let position = compute_position(
            &transactions,
            instrument.annual_fee_percent,
            as_of,
            current_price,
        );

        // Unrealized P&L is derived here, not inside the engine. Without any
        // quote the last transaction price stands in for the current price.
        let pricing = current_price.unwrap_or(position.last_price);
        let unrealized = position.unrealized_pnl(pricing);

        Ok(InstrumentPnl {
            instrument_id: instrument.id.clone(),
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            quantity: position.quantity,
            invested: position.invested,
            current_price,
            realized_pnl: position.realized_pnl,
            unrealized_pnl: unrealized,
            total_pnl: position.realized_pnl + unrealized,
        })
    }

    pub(crate) fn portfolio_summary_as_of(
        &self,
        owner: &str,
        as_of: DateTime<Utc>,
    ) -> Result<PnlSummary> {
        let instruments = self.instrument_repository.list(owner)?;
        debug!(
            "Computing portfolio summary over {} instruments for {}",
            instruments.len(),
            owner
        );

        let mut summary = PnlSummary::empty();
        for instrument in &instruments {
            let pnl = self.instrument_pnl_as_of(owner, instrument, as_of)?;
            summary.invested += pnl.invested;
            summary.realized_pnl += pnl.realized_pnl;
            summary.unrealized_pnl += pnl.unrealized_pnl;
            summary.total_pnl += pnl.total_pnl;
            summary.positions.push(pnl);
        }
        Ok(summary)
    }
}

impl SummaryServiceTrait for SummaryService {
    fn get_instrument_pnl(&self, owner: &str, instrument_id: &str) -> Result<InstrumentPnl> {
        let instrument = self.instrument_repository.get_by_id(owner, instrument_id)?;
        self.instrument_pnl_as_of(owner, &instrument, Utc::now())
    }

    fn get_portfolio_summary(&self, owner: &str) -> Result<PnlSummary> {
        self.portfolio_summary_as_of(owner, Utc::now())
    }
}
