use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use centime_core::expenses::{ExpenseService, ExpenseServiceTrait};
use centime_core::instruments::{InstrumentService, InstrumentServiceTrait};
use centime_core::market_data::QuoteRepositoryTrait;
use centime_core::portfolio::{
    HistoryService, HistoryServiceTrait, SummaryService, SummaryServiceTrait, TransactionService,
    TransactionServiceTrait,
};
use centime_core::splits::{SplitService, SplitServiceTrait};
use centime_storage_sqlite::db::{create_pool, run_migrations, spawn_writer};
use centime_storage_sqlite::expenses::ExpenseRepository;
use centime_storage_sqlite::instruments::InstrumentRepository;
use centime_storage_sqlite::quotes::QuoteRepository;
use centime_storage_sqlite::splits::{InteractionRepository, SplitSheetRepository};
use centime_storage_sqlite::transactions::TransactionRepository;

use crate::config::Config;

/// Shared handles to the domain services, injected into every handler.
pub struct AppState {
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub split_service: Arc<dyn SplitServiceTrait>,
    pub instrument_service: Arc<dyn InstrumentServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub summary_service: Arc<dyn SummaryServiceTrait>,
    pub history_service: Arc<dyn HistoryServiceTrait>,
    pub quote_repository: Arc<dyn QuoteRepositoryTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CENTIME_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database, runs migrations, and wires repositories into
/// services.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = create_pool(&config.db_path)?;
    run_migrations(&pool)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = spawn_writer(Arc::clone(&pool));

    let expense_repository = Arc::new(ExpenseRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let sheet_repository = Arc::new(SplitSheetRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let interaction_repository = Arc::new(InteractionRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let instrument_repository = Arc::new(InstrumentRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let transaction_repository = Arc::new(TransactionRepository::new(
        Arc::clone(&pool),
        writer.clone(),
    ));
    let quote_repository = Arc::new(QuoteRepository::new(Arc::clone(&pool), writer));

    let expense_service = Arc::new(ExpenseService::new(expense_repository));
    let split_service = Arc::new(SplitService::new(sheet_repository, interaction_repository));
    let instrument_service = Arc::new(InstrumentService::new(instrument_repository.clone()));
    let transaction_service = Arc::new(TransactionService::new(transaction_repository.clone()));
    let summary_service = Arc::new(SummaryService::new(
        instrument_repository.clone(),
        transaction_repository.clone(),
        quote_repository.clone(),
    ));
    let history_service = Arc::new(HistoryService::new(
        instrument_repository,
        transaction_repository,
        quote_repository.clone(),
    ));

    Ok(Arc::new(AppState {
        expense_service,
        split_service,
        instrument_service,
        transaction_service,
        summary_service,
        history_service,
        quote_repository,
    }))
}
