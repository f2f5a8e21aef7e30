//! Expense repository and service traits.

use async_trait::async_trait;

use super::expenses_model::{Expense, ExpenseSummary, ExpenseUpdate, NewExpense};
use crate::errors::Result;

/// Trait defining the contract for Expense repository operations.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn create(&self, owner: &str, new_expense: NewExpense) -> Result<Expense>;

    async fn update(&self, owner: &str, update: ExpenseUpdate) -> Result<Expense>;

    async fn delete(&self, owner: &str, expense_id: &str) -> Result<usize>;

    fn list(&self, owner: &str) -> Result<Vec<Expense>>;
}

/// Trait defining the contract for Expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn create_expense(&self, owner: &str, new_expense: NewExpense) -> Result<Expense>;

    async fn update_expense(&self, owner: &str, update: ExpenseUpdate) -> Result<Expense>;

    async fn delete_expense(&self, owner: &str, expense_id: &str) -> Result<()>;

    fn list_expenses(&self, owner: &str) -> Result<Vec<Expense>>;

    /// Sum of all recurring expenses, in cents.
    fn get_summary(&self, owner: &str) -> Result<ExpenseSummary>;
}
