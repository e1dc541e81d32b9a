mod support;

use std::num::NonZeroU32;

use support::{date, holiday, set_of};
use workday_backend::{
    data::baseline_overrides,
    models::{calculation::EndDateUnit, day_override::OverrideSet},
    services::{calculate_range, solve_end_date, EngineError},
};

fn days(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("non-zero")
}

#[test]
fn five_workdays_from_new_year_2025() {
    // Jan 1 is a holiday, so counting starts Thursday Jan 2.
    let end = solve_end_date(
        date(2025, 1, 1),
        days(5),
        EndDateUnit::Workday,
        &baseline_overrides(),
        true,
    )
    .unwrap();
    assert_eq!(end, date(2025, 1, 8));
}

#[test]
fn workday_search_crosses_lunar_new_year() {
    // Fri 24 Jan counts as day one; the next workday is Mon 3 Feb.
    let end = solve_end_date(
        date(2025, 1, 24),
        days(2),
        EndDateUnit::Workday,
        &baseline_overrides(),
        true,
    )
    .unwrap();
    assert_eq!(end, date(2025, 2, 3));
}

#[test]
fn excluding_start_shifts_origin_by_one_day() {
    let baseline = baseline_overrides();
    let included = solve_end_date(date(2025, 3, 3), days(3), EndDateUnit::Workday, &baseline, true)
        .unwrap();
    let excluded = solve_end_date(date(2025, 3, 3), days(3), EndDateUnit::Workday, &baseline, false)
        .unwrap();
    assert_eq!(included, date(2025, 3, 5));
    assert_eq!(excluded, date(2025, 3, 6));
}

#[test]
fn calendar_day_round_trip() {
    let baseline = baseline_overrides();
    let start = date(2025, 1, 20);
    for n in [1, 2, 7, 30, 365] {
        let end = solve_end_date(start, days(n), EndDateUnit::CalendarDay, &baseline, true).unwrap();
        assert_eq!(calculate_range(start, end, &baseline).total_calendar_days, n);
    }
}

#[test]
fn workday_round_trip() {
    let baseline = baseline_overrides();
    for start in [date(2025, 1, 1), date(2025, 1, 25), date(2025, 9, 26), date(2026, 2, 13)] {
        for n in [1, 3, 10, 45] {
            let end = solve_end_date(start, days(n), EndDateUnit::Workday, &baseline, true).unwrap();
            assert_eq!(
                calculate_range(start, end, &baseline).workday_count,
                n,
                "start {} n {}",
                start,
                n
            );
        }
    }
}

#[test]
fn holiday_wall_fails_with_bound_error() {
    let start = date(2025, 1, 1);
    let wall: OverrideSet = start
        .iter_days()
        .take(800)
        .map(|day| holiday(day, "Closed"))
        .collect();

    let err = solve_end_date(start, days(10), EndDateUnit::Workday, &wall, true).unwrap_err();
    assert!(matches!(
        err,
        EngineError::NoWorkdayWithinBound { day_count: 10, .. }
    ));
}

#[test]
fn long_holiday_run_inside_bound_still_resolves() {
    // Twenty straight weeks off exceed 7 * n but fit inside the slack.
    let start = date(2025, 3, 3);
    let closure = set_of(
        start
            .iter_days()
            .take(140)
            .map(|day| holiday(day, "Closure"))
            .collect(),
    );

    let end = solve_end_date(start, days(1), EndDateUnit::Workday, &closure, true).unwrap();
    assert_eq!(end, date(2025, 7, 21));
}
