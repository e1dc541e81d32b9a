use chrono::NaiveDate;

use crate::models::{calculation::CalculationResult, day_override::OverrideSet};

use super::day_classifier::{classify, is_weekend};

/// Counts every day in `start..=end`.
///
/// A reversed range (`start > end`) performs no iterations and yields an
/// all-zero result; rejecting it is the caller's job.
pub fn calculate_range(start: NaiveDate, end: NaiveDate, overrides: &OverrideSet) -> CalculationResult {
    let mut result = CalculationResult::default();

    for day in start.iter_days().take_while(|day| *day <= end) {
        result.total_calendar_days += 1;
        let verdict = classify(day, overrides);

        if verdict.is_workday() {
            result.workday_count += 1;
        } else {
            result.holiday_count += 1;
        }

        match overrides.get(day) {
            Some(entry) if entry.is_workday() => {
                result.overridden_workday_count += 1;
                result.overridden_workday_entries.push(entry.clone());
            }
            Some(entry) => {
                result.overridden_holiday_count += 1;
                result.overridden_holiday_entries.push(entry.clone());
            }
            None if is_weekend(day) => result.weekend_holiday_count += 1,
            None => {}
        }
    }

    tracing::trace!(
        %start,
        %end,
        total = result.total_calendar_days,
        workdays = result.workday_count,
        "range calculated"
    );

    result
}
