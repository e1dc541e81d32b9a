use std::num::NonZeroU32;

use chrono::{Days, NaiveDate};

use crate::models::{calculation::EndDateUnit, day_override::OverrideSet};

use super::{day_classifier::is_workday, EngineError};

/// Extra calendar days allowed beyond `7 * day_count` when searching for
/// workdays, enough to cross long holiday runs such as a lunar new year.
const SEARCH_SLACK_DAYS: u64 = 366;

/// Finds the date on which the `day_count`-th counted day falls.
///
/// With `include_start_date` the start date is day one (if it counts);
/// otherwise counting begins the day after. Calendar days are plain
/// arithmetic and ignore `overrides`.
pub fn solve_end_date(
    start: NaiveDate,
    day_count: NonZeroU32,
    unit: EndDateUnit,
    overrides: &OverrideSet,
    include_start_date: bool,
) -> Result<NaiveDate, EngineError> {
    let count = day_count.get();

    match unit {
        EndDateUnit::CalendarDay => {
            let offset = if include_start_date { count - 1 } else { count };
            start
                .checked_add_days(Days::new(u64::from(offset)))
                .ok_or(EngineError::DateOutOfRange(start))
        }
        EndDateUnit::Workday => {
            let origin = if include_start_date {
                start
            } else {
                start.succ_opt().ok_or(EngineError::DateOutOfRange(start))?
            };
            find_nth_workday(start, origin, count, overrides)
        }
    }
}

fn find_nth_workday(
    start: NaiveDate,
    origin: NaiveDate,
    count: u32,
    overrides: &OverrideSet,
) -> Result<NaiveDate, EngineError> {
    let bound = u64::from(count) * 7 + SEARCH_SLACK_DAYS;
    let mut counted = 0u32;
    let mut cursor = origin;

    for searched in 0..bound {
        if is_workday(cursor, overrides) {
            counted += 1;
            if counted == count {
                tracing::trace!(%origin, count, searched, end = %cursor, "workday target reached");
                return Ok(cursor);
            }
        }

        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => return Err(EngineError::DateOutOfRange(start)),
        };
    }

    Err(EngineError::NoWorkdayWithinBound {
        start,
        day_count: count,
        searched_days: bound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_override::{DayKind, DayOverride};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn calendar_days_include_start() {
        let end = solve_end_date(
            date(2025, 1, 1),
            days(10),
            EndDateUnit::CalendarDay,
            &OverrideSet::new(),
            true,
        )
        .unwrap();
        assert_eq!(end, date(2025, 1, 10));
    }

    #[test]
    fn calendar_days_exclude_start() {
        let end = solve_end_date(
            date(2025, 1, 1),
            days(10),
            EndDateUnit::CalendarDay,
            &OverrideSet::new(),
            false,
        )
        .unwrap();
        assert_eq!(end, date(2025, 1, 11));
    }

    #[test]
    fn calendar_days_ignore_overrides() {
        let overrides: OverrideSet =
            vec![DayOverride::new(date(2025, 1, 2), DayKind::Holiday, "Closed")].into();
        let end = solve_end_date(
            date(2025, 1, 1),
            days(3),
            EndDateUnit::CalendarDay,
            &overrides,
            true,
        )
        .unwrap();
        assert_eq!(end, date(2025, 1, 3));
    }

    #[test]
    fn workday_count_includes_the_returned_day() {
        // Monday 2025-03-03 counted as day one.
        let end = solve_end_date(
            date(2025, 3, 3),
            days(1),
            EndDateUnit::Workday,
            &OverrideSet::new(),
            true,
        )
        .unwrap();
        assert_eq!(end, date(2025, 3, 3));
    }

    #[test]
    fn workdays_skip_weekend() {
        // Friday + 1 workday excluding start lands on Monday.
        let end = solve_end_date(
            date(2025, 3, 7),
            days(1),
            EndDateUnit::Workday,
            &OverrideSet::new(),
            false,
        )
        .unwrap();
        assert_eq!(end, date(2025, 3, 10));
    }

    #[test]
    fn all_holiday_overrides_fail_instead_of_hanging() {
        let start = date(2025, 1, 1);
        let overrides: OverrideSet = start
            .iter_days()
            .take(1000)
            .map(|day| DayOverride::new(day, DayKind::Holiday, "Closed"))
            .collect();

        let err = solve_end_date(start, days(2), EndDateUnit::Workday, &overrides, true)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::NoWorkdayWithinBound {
                start,
                day_count: 2,
                searched_days: 2 * 7 + SEARCH_SLACK_DAYS,
            }
        );
    }

    #[test]
    fn calendar_overflow_is_reported() {
        let err = solve_end_date(
            NaiveDate::MAX,
            days(2),
            EndDateUnit::CalendarDay,
            &OverrideSet::new(),
            true,
        )
        .unwrap_err();
        assert_eq!(err, EngineError::DateOutOfRange(NaiveDate::MAX));
    }
}
