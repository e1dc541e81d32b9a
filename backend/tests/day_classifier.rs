mod support;

use chrono::{Datelike, Weekday};
use support::{date, holiday, set_of, workday};
use workday_backend::{
    data::baseline_overrides,
    models::day_override::{DayKind, OverrideSet},
    services::{classify, is_weekend},
};

#[test]
fn empty_set_classifies_by_weekday_for_a_full_year() {
    let empty = OverrideSet::new();
    for day in date(2024, 1, 1).iter_days().take(366) {
        let verdict = classify(day, &empty);
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(verdict.kind == DayKind::Holiday, weekend, "{}", day);
        assert_eq!(is_weekend(day), weekend);
        assert!(!verdict.is_overridden);
        assert!(verdict.label.is_empty());
    }
}

#[test]
fn overridden_exactly_when_the_set_has_the_date() {
    let overrides = set_of(vec![
        holiday(date(2025, 3, 5), "Company day off"),
        workday(date(2025, 3, 8), "Inventory"),
    ]);

    for day in date(2025, 3, 1).iter_days().take(14) {
        let verdict = classify(day, &overrides);
        assert_eq!(verdict.is_overridden, overrides.contains(day), "{}", day);
    }
}

#[test]
fn baseline_marks_new_year_and_make_up_saturday() {
    let baseline = baseline_overrides();

    let new_year = classify(date(2025, 1, 1), &baseline);
    assert!(new_year.is_overridden);
    assert_eq!(new_year.kind, DayKind::Holiday);
    assert_eq!(new_year.label, "New Year's Day");

    let make_up = classify(date(2025, 2, 8), &baseline);
    assert_eq!(date(2025, 2, 8).weekday(), Weekday::Sat);
    assert!(make_up.is_overridden);
    assert_eq!(make_up.kind, DayKind::Workday);
}
