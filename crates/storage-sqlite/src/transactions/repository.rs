use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::errors::{DatabaseError, Error};
use centime_core::portfolio::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionUpdate,
};
use centime_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{instruments, transactions};
use crate::utils::DATE_FORMAT;

fn transaction_not_found(transaction_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Transaction {} not found",
        transaction_id
    )))
}

fn instrument_not_found(instrument_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Instrument {} not found",
        instrument_id
    )))
}

/// Checks that `instrument` exists and belongs to `owner_name`.
fn instrument_is_owned(
    conn: &mut SqliteConnection,
    owner_name: &str,
    instrument: &str,
) -> Result<()> {
    let found = instruments::table
        .filter(instruments::id.eq(instrument))
        .filter(instruments::owner.eq(owner_name))
        .select(instruments::id)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?;
    match found {
        Some(_) => Ok(()),
        None => Err(instrument_not_found(instrument)),
    }
}

/// Returns the instrument id owning `transaction_id`, provided that
/// instrument belongs to `owner_name`.
fn owned_transaction_instrument(
    conn: &mut SqliteConnection,
    owner_name: &str,
    transaction_id: &str,
) -> Result<String> {
    let instrument_id = transactions::table
        .inner_join(instruments::table)
        .filter(transactions::id.eq(transaction_id))
        .filter(instruments::owner.eq(owner_name))
        .select(transactions::instrument_id)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?;
    instrument_id.ok_or_else(|| transaction_not_found(transaction_id))
}

/// Diesel-backed transaction repository. Ownership is checked through the
/// instrument row inside the same transaction as the write.
pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn create(&self, owner: &str, new_transaction: NewTransaction) -> Result<Transaction> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                instrument_is_owned(conn, &owner, &new_transaction.instrument_id)?;
                let row = TransactionDB {
                    id: Uuid::new_v4().to_string(),
                    instrument_id: new_transaction.instrument_id,
                    date: new_transaction.date.format(DATE_FORMAT).to_string(),
                    side: new_transaction.side.as_str().to_string(),
                    quantity: new_transaction.quantity.to_string(),
                    price: new_transaction.price.to_string(),
                    operation_fee: new_transaction.operation_fee.to_string(),
                    notes: new_transaction.notes,
                    created_at: Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(transactions::table)
                    .values(&row)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::from(inserted))
            })
            .await
    }

    async fn update(&self, owner: &str, update: TransactionUpdate) -> Result<Transaction> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                owned_transaction_instrument(conn, &owner, &update.id)?;
                let updated = diesel::update(
                    transactions::table.filter(transactions::id.eq(&update.id)),
                )
                .set((
                    transactions::date.eq(update.date.format(DATE_FORMAT).to_string()),
                    transactions::side.eq(update.side.as_str()),
                    transactions::quantity.eq(update.quantity.to_string()),
                    transactions::price.eq(update.price.to_string()),
                    transactions::operation_fee.eq(update.operation_fee.to_string()),
                    transactions::notes.eq(&update.notes),
                ))
                .returning(TransactionDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Transaction::from(updated))
            })
            .await
    }

    async fn delete(&self, owner: &str, transaction_id: &str) -> Result<String> {
        let owner = owner.to_string();
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<String> {
                let instrument_id =
                    owned_transaction_instrument(conn, &owner, &transaction_id)?;
                diesel::delete(transactions::table.filter(transactions::id.eq(&transaction_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(instrument_id)
            })
            .await
    }

    fn list_by_instrument(&self, owner: &str, instrument_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        instrument_is_owned(&mut conn, owner, instrument_id)?;
        let rows = transactions::table
            .filter(transactions::instrument_id.eq(instrument_id))
            .order((transactions::date.asc(), transactions::created_at.asc()))
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    fn list_by_owner(&self, owner: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .inner_join(instruments::table)
            .filter(instruments::owner.eq(owner))
            .order((transactions::date.asc(), transactions::created_at.asc()))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use crate::instruments::InstrumentRepository;
    use centime_core::instruments::{InstrumentRepositoryTrait, NewInstrument};
    use centime_core::portfolio::TradeSide;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    async fn create_test_repositories() -> (
        TransactionRepository,
        InstrumentRepository,
        tempfile::TempDir,
    ) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer(Arc::clone(&pool));
        (
            TransactionRepository::new(Arc::clone(&pool), writer.clone()),
            InstrumentRepository::new(pool, writer),
            temp_dir,
        )
    }

    async fn create_test_instrument(repo: &InstrumentRepository, owner: &str) -> String {
        repo.create(
            owner,
            NewInstrument {
                symbol: "VWCE".to_string(),
                name: "Vanguard FTSE All-World".to_string(),
                currency: "EUR".to_string(),
                annual_fee_percent: dec!(0.22),
            },
        )
        .await
        .expect("Failed to create instrument")
        .id
    }

    fn buy(instrument_id: &str, day: u32, quantity: &str) -> NewTransaction {
        NewTransaction {
            instrument_id: instrument_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            side: TradeSide::Buy,
            quantity: quantity.parse().unwrap(),
            price: dec!(100),
            operation_fee: dec!(1),
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_roundtrips_decimals_exactly() {
        let (transactions_repo, instruments_repo, _temp_dir) = create_test_repositories().await;
        let instrument_id = create_test_instrument(&instruments_repo, "alice").await;

        let created = transactions_repo
            .create(
                "alice",
                NewTransaction {
                    instrument_id: instrument_id.clone(),
                    date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                    side: TradeSide::Buy,
                    quantity: dec!(3.123456),
                    price: dec!(99.995),
                    operation_fee: dec!(1.5),
                    notes: Some("initial lot".to_string()),
                },
            )
            .await
            .unwrap();

        let listed = transactions_repo
            .list_by_instrument("alice", &instrument_id)
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].quantity, dec!(3.123456));
        assert_eq!(listed[0].price, dec!(99.995));
        assert_eq!(listed[0].operation_fee, dec!(1.5));
        assert_eq!(listed[0].side, TradeSide::Buy);
    }

    #[tokio::test]
    async fn create_rejects_foreign_instrument() {
        let (transactions_repo, instruments_repo, _temp_dir) = create_test_repositories().await;
        let instrument_id = create_test_instrument(&instruments_repo, "alice").await;

        let result = transactions_repo
            .create("bob", buy(&instrument_id, 1, "1"))
            .await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn list_orders_by_date_then_insertion() {
        let (transactions_repo, instruments_repo, _temp_dir) = create_test_repositories().await;
        let instrument_id = create_test_instrument(&instruments_repo, "alice").await;

        transactions_repo
            .create("alice", buy(&instrument_id, 20, "1"))
            .await
            .unwrap();
        transactions_repo
            .create("alice", buy(&instrument_id, 5, "2"))
            .await
            .unwrap();
        transactions_repo
            .create("alice", buy(&instrument_id, 5, "3"))
            .await
            .unwrap();

        let listed = transactions_repo
            .list_by_instrument("alice", &instrument_id)
            .unwrap();
        let quantities: Vec<String> = listed.iter().map(|t| t.quantity.to_string()).collect();
        assert_eq!(quantities, vec!["2", "3", "1"]);
    }

    #[tokio::test]
    async fn delete_returns_owning_instrument_id() {
        let (transactions_repo, instruments_repo, _temp_dir) = create_test_repositories().await;
        let instrument_id = create_test_instrument(&instruments_repo, "alice").await;

        let created = transactions_repo
            .create("alice", buy(&instrument_id, 1, "1"))
            .await
            .unwrap();

        let foreign = transactions_repo.delete("bob", &created.id).await;
        assert!(matches!(
            foreign,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));

        let returned = transactions_repo.delete("alice", &created.id).await.unwrap();
        assert_eq!(returned, instrument_id);
        assert!(transactions_repo
            .list_by_instrument("alice", &instrument_id)
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn deleting_instrument_cascades_to_transactions() {
        let (transactions_repo, instruments_repo, _temp_dir) = create_test_repositories().await;
        let instrument_id = create_test_instrument(&instruments_repo, "alice").await;

        transactions_repo
            .create("alice", buy(&instrument_id, 1, "1"))
            .await
            .unwrap();
        instruments_repo.delete("alice", &instrument_id).await.unwrap();

        assert!(transactions_repo.list_by_owner("alice").unwrap().is_empty());
    }
}
