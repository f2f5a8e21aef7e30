//! Centime Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Centime: the recurring
//! expense tracker, the shared-expense sheets with debt settlement, and the
//! portfolio cost-basis / P&L engine. It is database-agnostic and defines
//! traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod expenses;
pub mod instruments;
pub mod market_data;
pub mod portfolio;
pub mod splits;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
