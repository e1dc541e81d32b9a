use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};
use utoipa::ToSchema;

use crate::utils::time::now_utc;

/// Classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Workday,
    Holiday,
}

impl DayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Workday => "workday",
            DayKind::Holiday => "holiday",
        }
    }

    pub fn is_workday(&self) -> bool {
        matches!(self, DayKind::Workday)
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exception that pins one calendar date to a workday or a holiday,
/// overriding the weekday rule.
///
/// Field aliases accept records written by the browser version of the
/// calculator (`type`, `name`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayOverride {
    pub date: NaiveDate,
    #[serde(alias = "type")]
    pub kind: DayKind,
    #[serde(default, alias = "name")]
    pub label: String,
    #[serde(default = "now_utc", alias = "updatedAt")]
    pub last_modified: DateTime<Utc>,
}

impl DayOverride {
    pub fn new(date: NaiveDate, kind: DayKind, label: impl Into<String>) -> Self {
        Self {
            date,
            kind,
            label: label.into(),
            last_modified: now_utc(),
        }
    }

    pub fn is_workday(&self) -> bool {
        self.kind.is_workday()
    }
}

/// Payload for adding or replacing a personal override.
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate, ToSchema)]
pub struct UpsertDayOverridePayload {
    pub date: NaiveDate,
    pub kind: DayKind,
    #[validate(custom(function = "crate::validation::rules::validate_label"))]
    pub label: String,
}

impl From<UpsertDayOverridePayload> for DayOverride {
    fn from(value: UpsertDayOverridePayload) -> Self {
        DayOverride::new(value.date, value.kind, value.label.trim())
    }
}

/// An ordered collection of overrides holding at most one entry per date.
///
/// Inserting an entry for a date that is already present replaces it.
/// Iteration and serialization are ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DayOverride>", into = "Vec<DayOverride>")]
pub struct OverrideSet {
    entries: BTreeMap<NaiveDate, DayOverride>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayOverride> {
        self.entries.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayOverride> {
        self.entries.values()
    }

    pub fn to_vec(&self) -> Vec<DayOverride> {
        self.entries.values().cloned().collect()
    }

    pub fn holidays(&self) -> impl Iterator<Item = &DayOverride> {
        self.iter().filter(|entry| !entry.is_workday())
    }

    pub fn workdays(&self) -> impl Iterator<Item = &DayOverride> {
        self.iter().filter(|entry| entry.is_workday())
    }

    /// Inserts `entry`, returning the entry it replaced.
    pub fn insert(&mut self, entry: DayOverride) -> Option<DayOverride> {
        self.entries.insert(entry.date, entry)
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<DayOverride> {
        self.entries.remove(&date)
    }
}

impl FromIterator<DayOverride> for OverrideSet {
    fn from_iter<I: IntoIterator<Item = DayOverride>>(iter: I) -> Self {
        let mut set = OverrideSet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl Extend<DayOverride> for OverrideSet {
    fn extend<I: IntoIterator<Item = DayOverride>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl IntoIterator for OverrideSet {
    type Item = DayOverride;
    type IntoIter = std::collections::btree_map::IntoValues<NaiveDate, DayOverride>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl From<Vec<DayOverride>> for OverrideSet {
    fn from(value: Vec<DayOverride>) -> Self {
        value.into_iter().collect()
    }
}

impl From<OverrideSet> for Vec<DayOverride> {
    fn from(value: OverrideSet) -> Self {
        value.into_iter().collect()
    }
}
