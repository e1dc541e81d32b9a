//! Work-hour totals over the fixed daily schedule.
//!
//! Each workday has two work periods. A requested time window is
//! intersected with both; holidays contribute nothing regardless of the
//! window. In a multi-day range the requested start time applies only to
//! the first day and the requested end time only to the last day; the days
//! in between count their full schedule.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{
        calculation::{CalculationResult, DayWorkDetail, WorkedPeriod},
        day_override::OverrideSet,
    },
    utils::time::{format_work_duration, split_minutes, ClockTime},
};

use super::{day_classifier::is_workday, range_calculator::calculate_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct WorkPeriod {
    #[schema(value_type = String, example = "08:30")]
    pub start: ClockTime,
    #[schema(value_type = String, example = "12:30")]
    pub end: ClockTime,
}

impl WorkPeriod {
    pub fn minutes(&self) -> u32 {
        self.start.minutes_until(self.end)
    }

    /// Intersects `[from, to]` with this period; `None` bounds fall back to
    /// the period's own bounds.
    fn overlap(&self, from: Option<ClockTime>, to: Option<ClockTime>) -> Option<WorkedPeriod> {
        let start = from.unwrap_or(self.start).max(self.start);
        let end = to.unwrap_or(self.end).min(self.end);

        if start >= end {
            return None;
        }

        let (hours, minutes) = split_minutes(start.minutes_until(end));
        Some(WorkedPeriod {
            start,
            end,
            hours,
            minutes,
        })
    }
}

pub const MORNING_PERIOD: WorkPeriod = WorkPeriod {
    start: ClockTime::from_hm(8, 30),
    end: ClockTime::from_hm(12, 30),
};

pub const AFTERNOON_PERIOD: WorkPeriod = WorkPeriod {
    start: ClockTime::from_hm(13, 30),
    end: ClockTime::from_hm(17, 30),
};

pub const WORK_PERIODS: [WorkPeriod; 2] = [MORNING_PERIOD, AFTERNOON_PERIOD];

/// Worked time on `date` between `requested_start` and `requested_end`.
///
/// With neither bound the full schedule (480 minutes) counts on a workday.
pub fn calculate_day_work_minutes(
    date: NaiveDate,
    requested_start: Option<ClockTime>,
    requested_end: Option<ClockTime>,
    overrides: &OverrideSet,
) -> DayWorkDetail {
    let worked_periods: Vec<WorkedPeriod> = if is_workday(date, overrides) {
        WORK_PERIODS
            .iter()
            .filter_map(|period| period.overlap(requested_start, requested_end))
            .collect()
    } else {
        Vec::new()
    };

    let total: u32 = worked_periods
        .iter()
        .map(|period| period.hours * 60 + period.minutes)
        .sum();
    let (hours, minutes) = split_minutes(total);

    DayWorkDetail {
        date,
        hours,
        minutes,
        requested_start_time: requested_start,
        requested_end_time: requested_end,
        worked_periods,
    }
}

/// Day counts for `start_date..=end_date` plus worked time.
///
/// Boundary days always appear in `per_day_work_detail`, even with zero
/// minutes, so the requested times stay visible. Interior days appear only
/// when they contribute time.
pub fn calculate_range_work_hours(
    start_date: NaiveDate,
    end_date: NaiveDate,
    requested_start: Option<ClockTime>,
    requested_end: Option<ClockTime>,
    overrides: &OverrideSet,
) -> CalculationResult {
    let mut result = calculate_range(start_date, end_date, overrides);
    let mut total_minutes = 0u32;
    let mut details = Vec::new();

    for day in start_date.iter_days().take_while(|day| *day <= end_date) {
        let is_first = day == start_date;
        let is_last = day == end_date;

        let day_start = requested_start.filter(|_| is_first);
        let day_end = requested_end.filter(|_| is_last);
        let detail = calculate_day_work_minutes(day, day_start, day_end, overrides);
        let minutes = detail.total_minutes();

        if minutes > 0 || is_first || is_last {
            total_minutes += minutes;
            details.push(detail);
        }
    }

    let (hours, minutes) = split_minutes(total_minutes);
    tracing::debug!(
        %start_date,
        %end_date,
        worked = %format_work_duration(total_minutes),
        days_with_detail = details.len(),
        "work hours calculated"
    );

    result.work_hours = Some(hours);
    result.work_minutes = Some(minutes);
    result.total_work_minutes = Some(total_minutes);
    result.per_day_work_detail = Some(details);
    result
}
