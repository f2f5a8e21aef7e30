use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service for managing buy/sell transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn record_transaction(
        &self,
        owner: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        new_transaction.validate()?;
        debug!(
            "Recording {} of {} x {} for instrument {}",
            new_transaction.side.as_str(),
            new_transaction.quantity,
            new_transaction.price,
            new_transaction.instrument_id
        );
        self.repository.create(owner, new_transaction).await
    }

    async fn update_transaction(
        &self,
        owner: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        update.validate()?;
        self.repository.update(owner, update).await
    }

    async fn delete_transaction(&self, owner: &str, transaction_id: &str) -> Result<String> {
        self.repository.delete(owner, transaction_id).await
    }

    fn get_instrument_transactions(
        &self,
        owner: &str,
        instrument_id: &str,
    ) -> Result<Vec<Transaction>> {
        self.repository.list_by_instrument(owner, instrument_id)
    }
}
