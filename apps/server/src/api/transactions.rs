use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use centime_core::portfolio::{NewTransaction, Transaction, TransactionUpdate};

use crate::{error::ApiResult, identity::CurrentUser, main_lib::AppState};

async fn get_instrument_transactions(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state
        .transaction_service
        .get_instrument_transactions(&user, &id)?;
    Ok(Json(transactions))
}

async fn record_transaction(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(new_transaction): Json<NewTransaction>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .record_transaction(&user, new_transaction)
        .await?;
    state
        .history_service
        .invalidate_instrument(&transaction.instrument_id);
    Ok(Json(transaction))
}

async fn update_transaction(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<TransactionUpdate>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .transaction_service
        .update_transaction(&user, update)
        .await?;
    state
        .history_service
        .invalidate_instrument(&transaction.instrument_id);
    Ok(Json(transaction))
}

async fn delete_transaction(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let instrument_id = state
        .transaction_service
        .delete_transaction(&user, &id)
        .await?;
    state.history_service.invalidate_instrument(&instrument_id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/instruments/{id}/transactions",
            get(get_instrument_transactions),
        )
        .route(
            "/transactions",
            post(record_transaction).put(update_transaction),
        )
        .route("/transactions/{id}", delete(delete_transaction))
}
