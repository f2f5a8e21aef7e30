//! Portfolio module - transactions, cost-basis engine, P&L summary, and
//! historical value reconstruction.

pub mod history;
pub mod position;
pub mod summary;
pub mod transactions;

pub use history::*;
pub use position::*;
pub use summary::*;
pub use transactions::*;
