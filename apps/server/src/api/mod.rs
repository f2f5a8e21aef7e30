//! HTTP API: one router module per domain, nested under `/api/v1`.

pub mod expenses;
pub mod health;
pub mod instruments;
pub mod portfolio;
pub mod quotes;
pub mod splits;
pub mod transactions;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(expenses::router())
        .merge(splits::router())
        .merge(instruments::router())
        .merge(transactions::router())
        .merge(quotes::router())
        .merge(portfolio::router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
