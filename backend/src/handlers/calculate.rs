use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::calculation::{
        CalculationResult, EndDateRequest, EndDateResponse, RangeRequest, WorkHoursRequest,
    },
    services::{calculate_range, calculate_range_work_hours, solve_end_date},
    state::AppState,
};

pub async fn calculate_range_handler(
    State(state): State<AppState>,
    payload: Result<Json<RangeRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let overrides = state.overrides.load_merged().await;
    Ok(Json(calculate_range(
        payload.start_date,
        payload.end_date,
        &overrides,
    )))
}

pub async fn calculate_end_date(
    State(state): State<AppState>,
    payload: Result<Json<EndDateRequest>, JsonRejection>,
) -> Result<Json<EndDateResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    let day_count = payload
        .day_count()
        .ok_or_else(|| AppError::Validation(vec!["day_count: range".to_string()]))?;

    let overrides = state.overrides.load_merged().await;
    let end_date = solve_end_date(
        payload.start_date,
        day_count,
        payload.unit,
        &overrides,
        payload.include_start_date,
    )?;
    tracing::debug!(
        start_date = %payload.start_date,
        day_count = day_count.get(),
        unit = ?payload.unit,
        %end_date,
        "end date solved"
    );

    Ok(Json(EndDateResponse {
        end_date,
        result: calculate_range(payload.start_date, end_date, &overrides),
    }))
}

pub async fn calculate_work_hours(
    State(state): State<AppState>,
    payload: Result<Json<WorkHoursRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    let (start_time, end_time) = payload
        .clock_times()
        .map_err(|err| AppError::Validation(vec![err.to_string()]))?;

    let overrides = state.overrides.load_merged().await;
    Ok(Json(calculate_range_work_hours(
        payload.start_date,
        payload.end_date,
        Some(start_time),
        Some(end_time),
        &overrides,
    )))
}
