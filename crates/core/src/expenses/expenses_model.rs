//! Recurring monthly expense domain models. Amounts are integer cents.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A recurring monthly expense (rent, subscriptions, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub owner: String,
    pub label: String,
    pub amount_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub label: String,
    pub amount_cents: i64,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::MissingField("label".to_string()).into());
        }
        if self.amount_cents <= 0 {
            return Err(ValidationError::InvalidInput(
                "Expense amount must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating an existing expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: String,
    pub label: String,
    pub amount_cents: i64,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::MissingField("label".to_string()).into());
        }
        if self.amount_cents <= 0 {
            return Err(ValidationError::InvalidInput(
                "Expense amount must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Monthly spending summary: the sum of all recurring expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub monthly_total_cents: i64,
    pub count: usize,
}
