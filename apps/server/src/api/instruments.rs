use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use centime_core::instruments::{Instrument, InstrumentUpdate, NewInstrument};

use crate::{error::ApiResult, identity::CurrentUser, main_lib::AppState};

async fn get_instruments(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Instrument>>> {
    let instruments = state.instrument_service.list_instruments(&user)?;
    Ok(Json(instruments))
}

async fn create_instrument(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(new_instrument): Json<NewInstrument>,
) -> ApiResult<Json<Instrument>> {
    let instrument = state
        .instrument_service
        .create_instrument(&user, new_instrument)
        .await?;
    Ok(Json(instrument))
}

async fn update_instrument(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<InstrumentUpdate>,
) -> ApiResult<Json<Instrument>> {
    let instrument = state
        .instrument_service
        .update_instrument(&user, update)
        .await?;
    // Fee accrual depends on the instrument, so derived series are stale.
    state.history_service.invalidate_instrument(&instrument.id);
    Ok(Json(instrument))
}

async fn get_instrument(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Instrument>> {
    let instrument = state.instrument_service.get_instrument(&user, &id)?;
    Ok(Json(instrument))
}

async fn delete_instrument(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.instrument_service.delete_instrument(&user, &id).await?;
    state.history_service.invalidate_instrument(&id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/instruments",
            get(get_instruments)
                .post(create_instrument)
                .put(update_instrument),
        )
        .route(
            "/instruments/{id}",
            get(get_instrument).delete(delete_instrument),
        )
}
