//! Database models for recurring expenses.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use centime_core::expenses::Expense;

/// Database model for a recurring expense. Amounts are integer cents.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub owner: String,
    pub label: String,
    pub amount_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            owner: db.owner,
            label: db.label,
            amount_cents: db.amount_cents,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
