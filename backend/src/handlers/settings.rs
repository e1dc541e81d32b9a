use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::AppError,
    repositories::{AppSettings, AppSettingsPatch},
    state::AppState,
};

pub async fn get_settings(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.settings.load().await)
}

pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<AppSettingsPatch>, JsonRejection>,
) -> Result<Json<AppSettings>, AppError> {
    let Json(patch) = payload?;
    Ok(Json(state.settings.update(patch).await?))
}
