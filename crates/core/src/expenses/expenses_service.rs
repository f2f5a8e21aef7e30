use std::sync::Arc;

use super::expenses_model::{Expense, ExpenseSummary, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;

/// Service for managing recurring monthly expenses.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn create_expense(&self, owner: &str, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        self.repository.create(owner, new_expense).await
    }

    async fn update_expense(&self, owner: &str, update: ExpenseUpdate) -> Result<Expense> {
        update.validate()?;
        self.repository.update(owner, update).await
    }

    async fn delete_expense(&self, owner: &str, expense_id: &str) -> Result<()> {
        self.repository.delete(owner, expense_id).await?;
        Ok(())
    }

    fn list_expenses(&self, owner: &str) -> Result<Vec<Expense>> {
        self.repository.list(owner)
    }

    fn get_summary(&self, owner: &str) -> Result<ExpenseSummary> {
        let expenses = self.repository.list(owner)?;
        Ok(ExpenseSummary {
            monthly_total_cents: expenses.iter().map(|e| e.amount_cents).sum(),
            count: expenses.len(),
        })
    }
}
