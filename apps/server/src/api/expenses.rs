use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use centime_core::expenses::{Expense, ExpenseSummary, ExpenseUpdate, NewExpense};

use crate::{error::ApiResult, identity::CurrentUser, main_lib::AppState};

async fn get_expenses(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.list_expenses(&user)?;
    Ok(Json(expenses))
}

async fn create_expense(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(new_expense): Json<NewExpense>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.create_expense(&user, new_expense).await?;
    Ok(Json(expense))
}

async fn update_expense(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.update_expense(&user, update).await?;
    Ok(Json(expense))
}

async fn delete_expense(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_expense_summary(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExpenseSummary>> {
    let summary = state.expense_service.get_summary(&user)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses/summary", get(get_expense_summary))
        .route(
            "/expenses",
            get(get_expenses).post(create_expense).put(update_expense),
        )
        .route("/expenses/{id}", delete(delete_expense))
}
