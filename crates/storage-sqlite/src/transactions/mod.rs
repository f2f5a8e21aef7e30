//! SQLite storage implementation for buy/sell transactions.

mod model;
mod repository;

pub use model::TransactionDB;
pub use repository::TransactionRepository;
