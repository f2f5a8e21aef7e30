use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

use centime_core::market_data::{NewQuote, Quote};

use crate::{error::ApiResult, identity::CurrentUser, main_lib::AppState};

#[derive(serde::Deserialize)]
struct RangeQuery {
    from: NaiveDate,
    to: NaiveDate,
}

async fn get_quotes(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Query(range): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Quote>>> {
    // Resolving the instrument doubles as the ownership check.
    state.instrument_service.get_instrument(&user, &id)?;
    let quotes = state.quote_repository.list_range(&id, range.from, range.to)?;
    Ok(Json(quotes))
}

async fn ingest_quotes(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_quotes): Json<Vec<NewQuote>>,
) -> ApiResult<Json<Value>> {
    state.instrument_service.get_instrument(&user, &id)?;
    for quote in &new_quotes {
        quote.validate()?;
    }
    let upserted = state.quote_repository.upsert_batch(&id, new_quotes).await?;
    state.history_service.invalidate_instrument(&id);
    Ok(Json(json!({ "upserted": upserted })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/instruments/{id}/quotes",
        get(get_quotes).post(ingest_quotes),
    )
}
