//! Historical portfolio value reconstruction.
//!
//! Walks the merged, deduplicated, ascending set of all instruments' price
//! observation dates. At each date every instrument contributes its running
//! quantity (all transactions dated on or before it) multiplied by its latest
//! known close at or before it; an instrument with no price point yet simply
//! contributes nothing. Pure and synchronous, like the cost-basis engine.

use rust_decimal::Decimal;
use std::collections::BTreeSet;

use super::history_model::{InstrumentSeries, PortfolioValuePoint};
use crate::market_data::Quote;
use crate::portfolio::transactions::{TradeSide, Transaction};

/// Reconstructs the portfolio value series across all given instruments.
///
/// Quotes with non-positive closes must already be filtered out by the
/// caller.
pub fn reconstruct_portfolio_history(series: &[InstrumentSeries]) -> Vec<PortfolioValuePoint> {
    let timeline: BTreeSet<_> = series
        .iter()
        .flat_map(|s| s.quotes.iter().map(|q| q.date))
        .collect();

    let mut points: Vec<PortfolioValuePoint> = timeline
        .into_iter()
        .map(|date| PortfolioValuePoint {
            date,
            value: Decimal::ZERO,
        })
        .collect();

    for instrument in series {
        let mut transactions: Vec<&Transaction> = instrument.transactions.iter().collect();
        transactions.sort_by_key(|tx| tx.date);
        let mut quotes: Vec<&Quote> = instrument.quotes.iter().collect();
        quotes.sort_by_key(|q| q.date);

        let mut tx_idx = 0;
        let mut quote_idx = 0;
        let mut quantity = Decimal::ZERO;
        let mut last_close: Option<Decimal> = None;

        for point in points.iter_mut() {
            while tx_idx < transactions.len() && transactions[tx_idx].date <= point.date {
                quantity = advance_quantity(quantity, transactions[tx_idx]);
                tx_idx += 1;
            }
            while quote_idx < quotes.len() && quotes[quote_idx].date <= point.date {
                last_close = Some(quotes[quote_idx].close);
                quote_idx += 1;
            }
            if let Some(close) = last_close {
                point.value += quantity * close;
            }
        }
    }

    points
}

fn advance_quantity(quantity: Decimal, tx: &Transaction) -> Decimal {
    match tx.side {
        TradeSide::Buy => quantity + tx.quantity,
        TradeSide::Sell => (quantity - tx.quantity).max(Decimal::ZERO),
    }
}
