//! SQLite storage implementation for recurring expenses.

mod model;
mod repository;

pub use model::ExpenseDB;
pub use repository::ExpenseRepository;
