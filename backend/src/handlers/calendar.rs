use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    services::day_classifier::{classify, month_verdicts, DayVerdict},
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarMonthResponse {
    pub year: i32,
    pub month: u32,
    pub workday_count: usize,
    pub holiday_count: usize,
    pub days: Vec<DayVerdict>,
}

pub async fn get_month(
    State(state): State<AppState>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<Json<CalendarMonthResponse>, AppError> {
    let Query(CalendarQuery { year, month }) = query?;

    let overrides = state.overrides.load_merged().await;
    let days = month_verdicts(year, month, &overrides)?;
    let workday_count = days.iter().filter(|day| day.is_workday()).count();

    Ok(Json(CalendarMonthResponse {
        year,
        month,
        workday_count,
        holiday_count: days.len() - workday_count,
        days,
    }))
}

pub async fn get_day(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
) -> Result<Json<DayVerdict>, AppError> {
    let Path(date) = date?;
    let overrides = state.overrides.load_merged().await;
    Ok(Json(classify(date, &overrides)))
}
