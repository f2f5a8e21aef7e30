//! Transaction repository and service traits.
//!
//! These traits define the contract for transaction operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
///
/// Rows are always scoped to the owning user; the repository never returns
/// another user's transactions.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Records a new transaction for an instrument owned by `owner`.
    async fn create(&self, owner: &str, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Updates an existing transaction.
    async fn update(&self, owner: &str, update: TransactionUpdate) -> Result<Transaction>;

    /// Deletes a transaction by its ID. Returns the owning instrument's ID.
    async fn delete(&self, owner: &str, transaction_id: &str) -> Result<String>;

    /// Lists the transactions of one instrument, ordered by date ascending.
    fn list_by_instrument(&self, owner: &str, instrument_id: &str) -> Result<Vec<Transaction>>;

    /// Lists all of a user's transactions across instruments, ordered by
    /// date ascending.
    fn list_by_owner(&self, owner: &str) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Records a new transaction after input validation.
    async fn record_transaction(
        &self,
        owner: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    /// Updates a transaction after input validation.
    async fn update_transaction(
        &self,
        owner: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Deletes a transaction. Returns the owning instrument's ID so callers
    /// can invalidate derived data.
    async fn delete_transaction(&self, owner: &str, transaction_id: &str) -> Result<String>;

    /// Lists the transactions of one instrument, ordered by date ascending.
    fn get_instrument_transactions(
        &self,
        owner: &str,
        instrument_id: &str,
    ) -> Result<Vec<Transaction>>;
}
