//! Aggregated P&L models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// P&L of one instrument, derived from its full transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentPnl {
    pub instrument_id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub invested: Decimal,
    /// Latest known close, if the instrument has any quotes.
    pub current_price: Option<Decimal>,
    pub realized_pnl: Decimal,
    pub unrealized_pnl: Decimal,
    pub total_pnl: Decimal,
}

/// Portfolio-wide P&L: per-instrument results summed across instruments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlSummary {
    pub invested: Decimal,
    pub realized_pnl: Decimal,
    pub unrealized_pnl: Decimal,
    pub total_pnl: Decimal,
    pub positions: Vec<InstrumentPnl>,
}

impl PnlSummary {
    pub fn empty() -> Self {
        Self {
            invested: Decimal::ZERO,
            realized_pnl: Decimal::ZERO,
            unrealized_pnl: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
            positions: Vec::new(),
        }
    }
}
