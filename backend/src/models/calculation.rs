use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    models::day_override::DayOverride,
    utils::time::{ClockTime, ClockTimeError},
    validation::rules::{
        validate_clock_time, validate_date_order, validate_range_span, validate_time_order,
        DAY_COUNT_MAX,
    },
};

/// Unit used when counting forward from a start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EndDateUnit {
    Workday,
    CalendarDay,
}

/// Totals for a date range. Work-hour fields are present only for
/// work-hour queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResult {
    pub total_calendar_days: u32,
    pub workday_count: u32,
    pub holiday_count: u32,
    /// Holidays that come from the Saturday/Sunday rule rather than an override.
    pub weekend_holiday_count: u32,
    pub overridden_workday_count: u32,
    pub overridden_holiday_count: u32,
    pub overridden_workday_entries: Vec<DayOverride>,
    pub overridden_holiday_entries: Vec<DayOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_work_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_day_work_detail: Option<Vec<DayWorkDetail>>,
}

/// A slice of a fixed work period that was actually worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkedPeriod {
    #[schema(value_type = String, example = "08:30")]
    pub start: ClockTime,
    #[schema(value_type = String, example = "12:30")]
    pub end: ClockTime,
    pub hours: u32,
    pub minutes: u32,
}

/// Worked time on one day of a work-hour query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayWorkDetail {
    pub date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "09:00")]
    pub requested_start_time: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "17:30")]
    pub requested_end_time: Option<ClockTime>,
    pub worked_periods: Vec<WorkedPeriod>,
}

impl DayWorkDetail {
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

/// Payload for counting the days of an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_range_request"))]
pub struct RangeRequest {
    #[schema(value_type = String, format = Date, example = "2025-01-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2025-01-31")]
    pub end_date: NaiveDate,
}

fn validate_range_request(request: &RangeRequest) -> Result<(), ValidationError> {
    validate_date_order(request.start_date, request.end_date)?;
    validate_range_span(request.start_date, request.end_date)
}

fn default_include_start_date() -> bool {
    true
}

/// Payload for finding the date a number of days after a start date.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EndDateRequest {
    #[schema(value_type = String, format = Date, example = "2025-01-01")]
    pub start_date: NaiveDate,
    #[validate(range(min = 1, max = DAY_COUNT_MAX))]
    pub day_count: i64,
    pub unit: EndDateUnit,
    #[serde(default = "default_include_start_date")]
    pub include_start_date: bool,
}

impl EndDateRequest {
    /// The validated day count; `None` when `validate` would reject it.
    pub fn day_count(&self) -> Option<NonZeroU32> {
        u32::try_from(self.day_count).ok().and_then(NonZeroU32::new)
    }
}

/// Result of an end-date query, with the range totals up to that date.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndDateResponse {
    #[schema(value_type = String, format = Date, example = "2025-01-08")]
    pub end_date: NaiveDate,
    pub result: CalculationResult,
}

/// Payload for a work-hour query. Times are `HH:MM` strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_work_hours_request"))]
pub struct WorkHoursRequest {
    #[schema(value_type = String, format = Date, example = "2025-03-03")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2025-03-05")]
    pub end_date: NaiveDate,
    #[validate(custom(function = "validate_clock_time"))]
    #[schema(example = "10:00")]
    pub start_time: Option<String>,
    #[validate(custom(function = "validate_clock_time"))]
    #[schema(example = "15:00")]
    pub end_time: Option<String>,
}

impl WorkHoursRequest {
    pub fn clock_times(&self) -> Result<(ClockTime, ClockTime), ClockTimeError> {
        let start = self.start_time.as_deref().unwrap_or_default().parse()?;
        let end = self.end_time.as_deref().unwrap_or_default().parse()?;
        Ok((start, end))
    }
}

fn validate_work_hours_request(request: &WorkHoursRequest) -> Result<(), ValidationError> {
    validate_date_order(request.start_date, request.end_date)?;
    validate_range_span(request.start_date, request.end_date)?;

    if request.start_time.is_none() || request.end_time.is_none() {
        let mut error = ValidationError::new("time_required");
        error.message = Some("start_time and end_time are both required".into());
        return Err(error);
    }

    // Malformed times are reported by the field rules.
    if let Ok((start, end)) = request.clock_times() {
        if request.start_date == request.end_date {
            validate_time_order(start, end)?;
        }
    }
    Ok(())
}
