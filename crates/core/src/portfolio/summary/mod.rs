//! Portfolio summary module - per-instrument and portfolio-wide P&L.

mod summary_model;
mod summary_service;

pub use summary_model::{InstrumentPnl, PnlSummary};
pub use summary_service::{SummaryService, SummaryServiceTrait};
