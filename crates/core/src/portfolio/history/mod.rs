//! Portfolio history module - timeline-merge valuation and its service.

pub mod history_calculator;
mod history_model;
mod history_service;

pub use history_calculator::reconstruct_portfolio_history;
pub use history_model::{InstrumentSeries, PortfolioValuePoint};
pub use history_service::{HistoryService, HistoryServiceTrait};


#[cfg(test)]
mod history_service_tests;
