use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppError, repositories::StorageInfo, state::AppState};

pub async fn storage_info(State(state): State<AppState>) -> Result<Json<StorageInfo>, AppError> {
    Ok(Json(state.overrides.storage_info().await?))
}

pub async fn clear_storage(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.overrides.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
