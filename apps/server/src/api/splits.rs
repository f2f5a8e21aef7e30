use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};

use centime_core::splits::{Interaction, NewInteraction, NewSplitSheet, SheetStats, SplitSheet};

use crate::{error::ApiResult, identity::CurrentUser, main_lib::AppState};

async fn get_sheets(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SplitSheet>>> {
    let sheets = state.split_service.list_sheets(&user)?;
    Ok(Json(sheets))
}

async fn create_sheet(
    CurrentUser(user): CurrentUser,
    State(state): State<Arc<AppState>>,
    Json(new_sheet): Json<NewSplitSheet>,
) -> ApiResult<Json<SplitSheet>> {
    let sheet = state.split_service.create_sheet(&user, new_sheet).await?;
    Ok(Json(sheet))
}

async fn get_sheet(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SplitSheet>> {
    let sheet = state.split_service.get_sheet(&user, &id)?;
    Ok(Json(sheet))
}

async fn delete_sheet(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.split_service.delete_sheet(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_sheet_stats(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SheetStats>> {
    let stats = state.split_service.get_sheet_stats(&user, &id)?;
    Ok(Json(stats))
}

async fn get_interactions(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Interaction>>> {
    let interactions = state.split_service.list_interactions(&user, &id)?;
    Ok(Json(interactions))
}

async fn add_interaction(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_interaction): Json<NewInteraction>,
) -> ApiResult<Json<Interaction>> {
    let interaction = state
        .split_service
        .add_interaction(&user, &id, new_interaction)
        .await?;
    Ok(Json(interaction))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefundRequest {
    is_refunded: bool,
}

async fn set_interaction_refunded(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefundRequest>,
) -> ApiResult<Json<Interaction>> {
    let interaction = state
        .split_service
        .set_interaction_refunded(&user, &id, body.is_refunded)
        .await?;
    Ok(Json(interaction))
}

async fn delete_interaction(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.split_service.delete_interaction(&user, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sheets", get(get_sheets).post(create_sheet))
        .route("/sheets/{id}", get(get_sheet).delete(delete_sheet))
        .route("/sheets/{id}/stats", get(get_sheet_stats))
        .route(
            "/sheets/{id}/interactions",
            get(get_interactions).post(add_interaction),
        )
        .route("/interactions/{id}/refund", put(set_interaction_refunded))
        .route("/interactions/{id}", delete(delete_interaction))
}
