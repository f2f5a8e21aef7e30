//! Expenses module - recurring monthly expense tracking.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

// Re-export the public interface
pub use expenses_model::{Expense, ExpenseSummary, ExpenseUpdate, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
