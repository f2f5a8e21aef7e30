//! Running position state produced by the cost-basis engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running state of a single-instrument position.
///
/// Recomputed from the full transaction history on every query; never
/// persisted. `quantity` and `invested` are clamped so that an inconsistent
/// transaction log cannot drive them below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionState {
    /// Units currently held. Always >= 0.
    pub quantity: Decimal,
    /// Cost basis in currency units, including buy fees and accrued holding
    /// fees. Always >= 0.
    pub invested: Decimal,
    /// Realized profit and loss from sells. May be negative.
    pub realized_pnl: Decimal,
    /// Price of the most recent transaction, or the caller-supplied current
    /// price after the last transaction. Basis for fee accrual.
    pub last_price: Decimal,
    /// Instant up to which holding fees have been accrued.
    #[serde(skip)]
    pub last_fee_checkpoint: Option<DateTime<Utc>>,
}

impl PositionState {
    /// Fresh state at the start of a computation. `price_hint` seeds the
    /// fee-accrual base price before the first transaction.
    pub fn opening(price_hint: Option<Decimal>) -> Self {
        Self {
            quantity: Decimal::ZERO,
            invested: Decimal::ZERO,
            realized_pnl: Decimal::ZERO,
            last_price: price_hint.unwrap_or_default(),
            last_fee_checkpoint: None,
        }
    }

    /// Unrealized P&L at the given price. The engine itself never computes
    /// this; callers derive it.
    pub fn unrealized_pnl(&self, current_price: Decimal) -> Decimal {
        self.quantity * current_price - self.invested
    }
}
