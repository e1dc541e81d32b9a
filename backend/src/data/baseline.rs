//! The published holiday calendar shipped with every release.
//!
//! Taiwan public holidays, bridge holidays and make-up workdays for 2025
//! and 2026. Personal overrides are layered on top of this set.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::day_override::{
    DayKind::{self, Holiday, Workday},
    DayOverride, OverrideSet,
};

/// 2024-01-01T00:00:00Z, the publication stamp of this calendar revision.
const PUBLISHED_AT_UNIX: i64 = 1_704_067_200;

const BASELINE: &[(i32, u32, u32, DayKind, &str)] = &[
    (2025, 1, 1, Holiday, "New Year's Day"),
    (2025, 1, 27, Holiday, "Lunar New Year bridge holiday"),
    (2025, 1, 28, Holiday, "Lunar New Year's Eve"),
    (2025, 1, 29, Holiday, "Lunar New Year day 1"),
    (2025, 1, 30, Holiday, "Lunar New Year day 2"),
    (2025, 1, 31, Holiday, "Lunar New Year day 3"),
    (2025, 2, 8, Workday, "Lunar New Year make-up workday"),
    (2025, 2, 28, Holiday, "Peace Memorial Day"),
    (2025, 4, 3, Holiday, "Children's Day and Tomb Sweeping Day (observed)"),
    (2025, 4, 4, Holiday, "Children's Day and Tomb Sweeping Day"),
    (2025, 5, 30, Holiday, "Dragon Boat Festival (observed)"),
    (2025, 5, 31, Holiday, "Dragon Boat Festival"),
    (2025, 9, 28, Holiday, "Teachers' Day"),
    (2025, 9, 29, Holiday, "Teachers' Day (observed)"),
    (2025, 10, 6, Holiday, "Mid-Autumn Festival"),
    (2025, 10, 10, Holiday, "National Day"),
    (2025, 10, 24, Holiday, "Retrocession Day (observed)"),
    (2025, 10, 25, Holiday, "Retrocession Day"),
    (2025, 12, 25, Holiday, "Constitution Day"),
    (2026, 1, 1, Holiday, "New Year's Day"),
    (2026, 2, 16, Holiday, "Lunar New Year's Eve"),
    (2026, 2, 17, Holiday, "Lunar New Year day 1"),
    (2026, 2, 18, Holiday, "Lunar New Year day 2"),
    (2026, 2, 19, Holiday, "Lunar New Year day 3"),
    (2026, 2, 20, Holiday, "Lunar New Year day 4"),
    (2026, 2, 27, Holiday, "Peace Memorial Day (observed)"),
    (2026, 2, 28, Holiday, "Peace Memorial Day"),
    (2026, 4, 3, Holiday, "Children's Day (observed)"),
    (2026, 4, 4, Holiday, "Children's Day"),
    (2026, 4, 5, Holiday, "Tomb Sweeping Day"),
    (2026, 4, 6, Holiday, "Tomb Sweeping Day (observed)"),
    (2026, 5, 1, Holiday, "Labour Day"),
    (2026, 6, 19, Holiday, "Dragon Boat Festival"),
    (2026, 9, 25, Holiday, "Mid-Autumn Festival"),
    (2026, 9, 28, Holiday, "Teachers' Day"),
    (2026, 10, 9, Holiday, "National Day (observed)"),
    (2026, 10, 10, Holiday, "National Day"),
    (2026, 10, 25, Holiday, "Retrocession Day"),
    (2026, 10, 26, Holiday, "Retrocession Day (observed)"),
    (2026, 12, 25, Holiday, "Constitution Day"),
];

/// Builds the baseline override set.
pub fn baseline_overrides() -> OverrideSet {
    let published_at = DateTime::<Utc>::from_timestamp(PUBLISHED_AT_UNIX, 0).unwrap_or_default();

    BASELINE
        .iter()
        .filter_map(|&(year, month, day, kind, label)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| DayOverride {
                date,
                kind,
                label: label.to_string(),
                last_modified: published_at,
            })
        })
        .collect()
}
