use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::day_override::{DayKind, OverrideSet};

use super::EngineError;

/// The classification of one date, derived from an override set and the
/// date's weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DayVerdict {
    pub date: NaiveDate,
    pub is_overridden: bool,
    pub kind: DayKind,
    pub label: String,
}

impl DayVerdict {
    pub fn is_workday(&self) -> bool {
        self.kind.is_workday()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies `date`. An override for the exact date wins; otherwise
/// Saturday and Sunday are holidays and every other day is a workday.
pub fn classify(date: NaiveDate, overrides: &OverrideSet) -> DayVerdict {
    if let Some(entry) = overrides.get(date) {
        return DayVerdict {
            date,
            is_overridden: true,
            kind: entry.kind,
            label: entry.label.clone(),
        };
    }

    let kind = if is_weekend(date) {
        DayKind::Holiday
    } else {
        DayKind::Workday
    };

    DayVerdict {
        date,
        is_overridden: false,
        kind,
        label: String::new(),
    }
}

pub fn is_workday(date: NaiveDate, overrides: &OverrideSet) -> bool {
    match overrides.get(date) {
        Some(entry) => entry.is_workday(),
        None => !is_weekend(date),
    }
}

/// Returns one verdict per day of the given month, in date order.
pub fn month_verdicts(
    year: i32,
    month: u32,
    overrides: &OverrideSet,
) -> Result<Vec<DayVerdict>, EngineError> {
    let (window_start, window_end) = month_bounds(year, month)?;

    Ok(window_start
        .iter_days()
        .take_while(|day| *day < window_end)
        .map(|day| classify(day, overrides))
        .collect())
}

fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), EngineError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidMonth { year, month })?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or(EngineError::InvalidMonth { year, month })?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_override::DayOverride;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekend_defaults_to_holiday() {
        let empty = OverrideSet::new();
        let saturday = classify(date(2025, 3, 1), &empty);
        assert_eq!(saturday.kind, DayKind::Holiday);
        assert!(!saturday.is_overridden);
        assert!(saturday.label.is_empty());

        let monday = classify(date(2025, 3, 3), &empty);
        assert_eq!(monday.kind, DayKind::Workday);
        assert!(!monday.is_overridden);
    }

    #[test]
    fn override_wins_over_weekday_rule() {
        let overrides: OverrideSet = vec![
            DayOverride::new(date(2025, 2, 8), DayKind::Workday, "Make-up workday"),
            DayOverride::new(date(2025, 1, 1), DayKind::Holiday, "New Year's Day"),
        ]
        .into();

        let saturday = classify(date(2025, 2, 8), &overrides);
        assert!(saturday.is_overridden);
        assert_eq!(saturday.kind, DayKind::Workday);
        assert_eq!(saturday.label, "Make-up workday");

        let wednesday = classify(date(2025, 1, 1), &overrides);
        assert!(wednesday.is_overridden);
        assert!(!wednesday.is_workday());
        assert!(!is_workday(date(2025, 1, 1), &overrides));
        assert!(is_workday(date(2025, 2, 8), &overrides));
    }

    #[test]
    fn month_bounds_handles_december() {
        let (start, end) = month_bounds(2024, 12).unwrap();
        assert_eq!(start, date(2024, 12, 1));
        assert_eq!(end, date(2025, 1, 1));
    }

    #[test]
    fn month_bounds_rejects_invalid_month() {
        assert_eq!(
            month_bounds(2024, 13),
            Err(EngineError::InvalidMonth {
                year: 2024,
                month: 13
            })
        );
    }

    #[test]
    fn month_verdicts_cover_every_day() {
        let verdicts = month_verdicts(2024, 2, &OverrideSet::new()).unwrap();
        assert_eq!(verdicts.len(), 29);
        assert_eq!(verdicts.first().unwrap().date, date(2024, 2, 1));
        assert_eq!(verdicts.last().unwrap().date, date(2024, 2, 29));
        assert_eq!(verdicts.iter().filter(|v| v.is_workday()).count(), 21);
    }
}
