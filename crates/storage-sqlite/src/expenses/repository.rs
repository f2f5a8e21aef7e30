use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::errors::{DatabaseError, Error};
use centime_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use centime_core::Result;

use super::model::ExpenseDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;

/// Diesel-backed expense repository. Reads go through the pool; writes go
/// through the single-writer actor.
pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn create(&self, owner: &str, new_expense: NewExpense) -> Result<Expense> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let now = Utc::now().naive_utc();
                let row = ExpenseDB {
                    id: Uuid::new_v4().to_string(),
                    owner,
                    label: new_expense.label,
                    amount_cents: new_expense.amount_cents,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(inserted))
            })
            .await
    }

    async fn update(&self, owner: &str, update: ExpenseUpdate) -> Result<Expense> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let updated = diesel::update(
                    expenses::table
                        .filter(expenses::id.eq(&update.id))
                        .filter(expenses::owner.eq(&owner)),
                )
                .set((
                    expenses::label.eq(&update.label),
                    expenses::amount_cents.eq(update.amount_cents),
                    expenses::updated_at.eq(Utc::now().naive_utc()),
                ))
                .returning(ExpenseDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Expense::from(updated))
            })
            .await
    }

    async fn delete(&self, owner: &str, expense_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(
                    expenses::table
                        .filter(expenses::id.eq(&expense_id))
                        .filter(expenses::owner.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Expense {} not found",
                        expense_id
                    ))));
                }
                Ok(deleted)
            })
            .await
    }

    fn list(&self, owner: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::owner.eq(owner))
            .order(expenses::created_at.asc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use centime_core::errors::{DatabaseError, Error};
    use tempfile::tempdir;

    async fn create_test_repository() -> (ExpenseRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer(Arc::clone(&pool));
        (ExpenseRepository::new(pool, writer), temp_dir)
    }

    fn new_expense(label: &str, amount_cents: i64) -> NewExpense {
        NewExpense {
            label: label.to_string(),
            amount_cents,
        }
    }

    #[tokio::test]
    async fn create_and_list_roundtrip() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .create("alice", new_expense("Rent", 120_000))
            .await
            .expect("Failed to create expense");
        assert_eq!(created.owner, "alice");
        assert_eq!(created.amount_cents, 120_000);

        let listed = repo.list("alice").expect("Failed to list expenses");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].label, "Rent");
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner() {
        let (repo, _temp_dir) = create_test_repository().await;

        repo.create("alice", new_expense("Rent", 120_000))
            .await
            .unwrap();
        repo.create("bob", new_expense("Gym", 3_000)).await.unwrap();

        let alice = repo.list("alice").unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].label, "Rent");
        let bob = repo.list("bob").unwrap();
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].label, "Gym");
    }

    #[tokio::test]
    async fn update_changes_label_and_amount() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .create("alice", new_expense("Rent", 120_000))
            .await
            .unwrap();
        let updated = repo
            .update(
                "alice",
                ExpenseUpdate {
                    id: created.id.clone(),
                    label: "Rent + utilities".to_string(),
                    amount_cents: 135_000,
                },
            )
            .await
            .expect("Failed to update expense");
        assert_eq!(updated.label, "Rent + utilities");
        assert_eq!(updated.amount_cents, 135_000);
    }

    #[tokio::test]
    async fn update_rejects_other_owner() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .create("alice", new_expense("Rent", 120_000))
            .await
            .unwrap();
        let result = repo
            .update(
                "bob",
                ExpenseUpdate {
                    id: created.id,
                    label: "Hijacked".to_string(),
                    amount_cents: 1,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn delete_removes_row_and_checks_owner() {
        let (repo, _temp_dir) = create_test_repository().await;

        let created = repo
            .create("alice", new_expense("Rent", 120_000))
            .await
            .unwrap();

        let forbidden = repo.delete("bob", &created.id).await;
        assert!(matches!(
            forbidden,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));

        repo.delete("alice", &created.id)
            .await
            .expect("Failed to delete expense");
        assert!(repo.list("alice").unwrap().is_empty());
    }
}
