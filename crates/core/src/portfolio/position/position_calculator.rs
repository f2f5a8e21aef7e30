//! Cost-basis / P&L engine.
//!
//! Given a chronological list of buy/sell transactions, an annual fee rate,
//! and an optional current price, computes the running quantity held, the
//! amount invested (cost basis), realized P&L, and time-prorated fee drag.
//!
//! The engine is pure: it performs no I/O, raises no errors, and operates on
//! freshly constructed state per invocation, so it is safe to call from
//! concurrent requests. Numeric validation is the caller's responsibility.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, MathematicalOps};

use crate::constants::FEE_DAYS_PER_YEAR;
use crate::portfolio::position::PositionState;
use crate::portfolio::transactions::{TradeSide, Transaction};

/// Computes the position state for one instrument as of `as_of`.
///
/// Transactions are sorted ascending by date before processing (stable, so
/// same-day entries keep their input order). `annual_fee_percent = 0`
/// disables fee accrual. `current_price` seeds the fee-accrual base price
/// before the first transaction and prices the trailing accrual window after
/// the last one; when absent, the most recent transaction price is used.
pub fn compute_position(
    transactions: &[Transaction],
    annual_fee_percent: Decimal,
    as_of: DateTime<Utc>,
    current_price: Option<Decimal>,
) -> PositionState {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.date);

    let mut state = PositionState::opening(current_price);
    for tx in ordered {
        state = accrue_fees(state, start_of_day(tx.date), annual_fee_percent);
        state = apply_transaction(state, tx);
    }

    if let Some(price) = current_price {
        state.last_price = price;
    }
    accrue_fees(state, as_of, annual_fee_percent)
}

/// Accrues holding fees from the last checkpoint up to `up_to` and advances
/// the checkpoint.
///
/// The first call sets the checkpoint without charging: there is no holding
/// period to charge against yet. A zero day span, a non-positive fee rate,
/// an empty position, or an unknown price all skip the charge but still
/// advance the checkpoint.
fn accrue_fees(
    mut state: PositionState,
    up_to: DateTime<Utc>,
    annual_fee_percent: Decimal,
) -> PositionState {
    let since = match state.last_fee_checkpoint.replace(up_to) {
        Some(since) => since,
        None => return state,
    };

    let day_span = (up_to - since).num_days();
    if day_span <= 0
        || annual_fee_percent <= Decimal::ZERO
        || state.quantity <= Decimal::ZERO
        || state.last_price <= Decimal::ZERO
    {
        return state;
    }

    // Compounding daily rate: base * (1 - (1 - daily)^days).
    let daily_rate =
        annual_fee_percent / Decimal::ONE_HUNDRED / Decimal::from(FEE_DAYS_PER_YEAR);
    let fee_base = state.quantity * state.last_price;
    let fee = fee_base * (Decimal::ONE - (Decimal::ONE - daily_rate).powi(day_span));

    state.invested = (state.invested + fee).max(Decimal::ZERO);
    state
}

/// Applies one transaction to the position state.
fn apply_transaction(mut state: PositionState, tx: &Transaction) -> PositionState {
    match tx.side {
        TradeSide::Buy => {
            state.quantity += tx.quantity;
            state.invested += tx.quantity * tx.price + tx.operation_fee;
        }
        TradeSide::Sell => {
            let avg_cost = if state.quantity <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                state.invested / state.quantity
            };
            let cost_basis = tx.quantity * avg_cost;
            let sell_value = tx.quantity * tx.price - tx.operation_fee;
            state.realized_pnl += sell_value - cost_basis;
            // Clamped: an inconsistent log cannot drive either below zero.
            state.invested = (state.invested - cost_basis).max(Decimal::ZERO);
            state.quantity = (state.quantity - tx.quantity).max(Decimal::ZERO);
        }
    }
    state.last_price = tx.price;
    state
}

/// Maps a transaction's calendar date to the UTC instant used for whole-day
/// fee spans.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}
