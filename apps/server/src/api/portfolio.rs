use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;

use centime_core::portfolio::{InstrumentPnl, PnlSummary, PortfolioValuePoint};

use crate::{error::ApiResult, identity::CurrentUser, main_lib::AppState};

async fn get_portfolio_summary(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PnlSummary>> {
    let summary = state.summary_service.get_portfolio_summary(&user)?;
    Ok(Json(summary))
}

async fn get_instrument_pnl(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<InstrumentPnl>> {
    let pnl = state.summary_service.get_instrument_pnl(&user, &id)?;
    Ok(Json(pnl))
}

#[derive(serde::Deserialize)]
struct RangeQuery {
    from: NaiveDate,
    to: NaiveDate,
}

async fn get_portfolio_history(
    CurrentUser(user): CurrentUser,
    Query(range): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PortfolioValuePoint>>> {
    let history = state
        .history_service
        .get_portfolio_history(&user, range.from, range.to)?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_portfolio_summary))
        .route("/portfolio/history", get(get_portfolio_history))
        .route("/instruments/{id}/pnl", get(get_instrument_pnl))
}
