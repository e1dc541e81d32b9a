use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppError,
    models::day_override::{DayOverride, UpsertDayOverridePayload},
    repositories::PromotionCandidates,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UpsertDayOverrideResponse {
    pub entry: DayOverride,
    /// The personal entry this one replaced, if any.
    pub replaced: Option<DayOverride>,
}

pub async fn list_merged(State(state): State<AppState>) -> Json<Vec<DayOverride>> {
    Json(state.overrides.load_merged().await.to_vec())
}

pub async fn list_baseline(State(state): State<AppState>) -> Json<Vec<DayOverride>> {
    Json(state.overrides.baseline().to_vec())
}

pub async fn list_personal(State(state): State<AppState>) -> Json<Vec<DayOverride>> {
    Json(state.overrides.load_personal().await.to_vec())
}

pub async fn upsert_personal(
    State(state): State<AppState>,
    payload: Result<Json<UpsertDayOverridePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<UpsertDayOverrideResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let entry = DayOverride::from(payload);
    let replaced = state.overrides.add_personal(entry.clone()).await?;
    tracing::info!(
        date = %entry.date,
        kind = %entry.kind,
        replaced = replaced.is_some(),
        "personal override stored"
    );

    let status = if replaced.is_some() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(UpsertDayOverrideResponse { entry, replaced })))
}

pub async fn delete_personal(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
) -> Result<Json<DayOverride>, AppError> {
    let Path(date) = date?;

    match state.overrides.remove_personal(date).await? {
        Some(removed) => {
            tracing::info!(%date, "personal override removed");
            Ok(Json(removed))
        }
        None => Err(AppError::NotFound(format!(
            "No personal override for {}",
            date
        ))),
    }
}

pub async fn list_promotions(State(state): State<AppState>) -> Json<PromotionCandidates> {
    Json(state.overrides.promotion_candidates().await)
}
