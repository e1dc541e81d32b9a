//! Baseline and personal override sets, and their persistence.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    models::day_override::{DayOverride, OverrideSet},
    utils::time::now_utc,
};

use super::storage::{
    KeyValueStore, StorageError, APP_SETTINGS_KEY, LAST_SYNC_KEY, LEGACY_OVERRIDES_KEY,
    PERSONAL_OVERRIDES_KEY,
};

/// Baseline entries with date-matching personal entries substituted and
/// personal-only entries added.
pub fn merge_overrides(baseline: &OverrideSet, personal: &OverrideSet) -> OverrideSet {
    let mut merged = baseline.clone();
    merged.extend(personal.iter().cloned());
    merged
}

pub fn add_or_replace(set: &OverrideSet, entry: DayOverride) -> OverrideSet {
    let mut next = set.clone();
    next.insert(entry);
    next
}

pub fn remove(set: &OverrideSet, date: NaiveDate) -> OverrideSet {
    set.iter().filter(|entry| entry.date != date).cloned().collect()
}

/// Parses a stored override array, skipping entries that do not decode.
///
/// Returns `None` when the document itself is not a JSON array.
fn decode_entries(key: &str, raw: &str) -> Option<OverrideSet> {
    let items = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored overrides are not a JSON array");
            return None;
        }
    };

    let total = items.len();
    let set: OverrideSet = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<DayOverride>(item).ok())
        .collect();

    if set.len() < total {
        tracing::warn!(key, total, kept = set.len(), "skipped malformed override entries");
    }
    Some(set)
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StorageInfo {
    pub personal_count: usize,
    /// Bytes held by the personal set and the app settings.
    pub bytes_used: usize,
    pub last_sync: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PromotionCandidates {
    /// Personal entries whose dates the baseline does not cover.
    pub candidates: Vec<DayOverride>,
    pub baseline_size: usize,
    pub baseline_size_after: usize,
}

/// Owns the compiled-in baseline and reads/writes the personal set.
///
/// Updates are load-modify-save without locking; concurrent writers
/// resolve as last writer wins.
#[derive(Clone)]
pub struct OverrideRepository {
    store: Arc<dyn KeyValueStore>,
    baseline: Arc<OverrideSet>,
}

impl OverrideRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, baseline: OverrideSet) -> Self {
        Self {
            store,
            baseline: Arc::new(baseline),
        }
    }

    pub fn baseline(&self) -> &OverrideSet {
        &self.baseline
    }

    /// Missing, unreadable or corrupt data all yield an empty set.
    pub async fn load_personal(&self) -> OverrideSet {
        match self.store.get(PERSONAL_OVERRIDES_KEY).await {
            Ok(Some(raw)) => decode_entries(PERSONAL_OVERRIDES_KEY, &raw).unwrap_or_default(),
            Ok(None) => OverrideSet::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read personal overrides; using empty set");
                OverrideSet::new()
            }
        }
    }

    /// Writes the personal set, then stamps the last-sync time. A failed
    /// stamp is logged and does not fail the save.
    pub async fn save_personal(&self, set: &OverrideSet) -> Result<(), StorageError> {
        let raw = serde_json::to_string(set).map_err(|source| StorageError::Serialization {
            key: PERSONAL_OVERRIDES_KEY.to_string(),
            source,
        })?;
        self.store.set(PERSONAL_OVERRIDES_KEY, &raw).await?;
        if let Err(err) = self
            .store
            .set(LAST_SYNC_KEY, &now_utc().to_rfc3339())
            .await
        {
            tracing::warn!(error = %err, "failed to record last sync time");
        }

        tracing::info!(count = set.len(), "saved personal overrides");
        Ok(())
    }

    pub async fn load_merged(&self) -> OverrideSet {
        let personal = self.load_personal().await;
        merge_overrides(&self.baseline, &personal)
    }

    /// Stores `entry`, returning the personal entry it replaced.
    pub async fn add_personal(&self, entry: DayOverride) -> Result<Option<DayOverride>, StorageError> {
        let current = self.load_personal().await;
        let previous = current.get(entry.date).cloned();
        let next = add_or_replace(&current, entry);
        self.save_personal(&next).await?;
        Ok(previous)
    }

    /// Removes the personal entry for `date`. Nothing is written when no
    /// such entry exists.
    pub async fn remove_personal(&self, date: NaiveDate) -> Result<Option<DayOverride>, StorageError> {
        let current = self.load_personal().await;
        let Some(removed) = current.get(date).cloned() else {
            return Ok(None);
        };
        self.save_personal(&remove(&current, date)).await?;
        Ok(Some(removed))
    }

    pub async fn last_sync(&self) -> Option<DateTime<Utc>> {
        let raw = self.store.get(LAST_SYNC_KEY).await.ok().flatten()?;
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(stamp) => Some(stamp.with_timezone(&Utc)),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unparsable last-sync stamp");
                None
            }
        }
    }

    /// Drops the personal set, the app settings and the last-sync stamp.
    pub async fn clear(&self) -> Result<(), StorageError> {
        for key in [PERSONAL_OVERRIDES_KEY, APP_SETTINGS_KEY, LAST_SYNC_KEY] {
            self.store.remove(key).await?;
        }
        tracing::info!("cleared stored overrides and settings");
        Ok(())
    }

    pub async fn storage_info(&self) -> Result<StorageInfo, StorageError> {
        let personal_bytes = self
            .store
            .get(PERSONAL_OVERRIDES_KEY)
            .await?
            .map_or(0, |raw| raw.len());
        let settings_bytes = self
            .store
            .get(APP_SETTINGS_KEY)
            .await?
            .map_or(0, |raw| raw.len());

        Ok(StorageInfo {
            personal_count: self.load_personal().await.len(),
            bytes_used: personal_bytes + settings_bytes,
            last_sync: self.last_sync().await,
        })
    }

    pub async fn promotion_candidates(&self) -> PromotionCandidates {
        let personal = self.load_personal().await;
        let candidates: Vec<DayOverride> = personal
            .iter()
            .filter(|entry| !self.baseline.contains(entry.date))
            .cloned()
            .collect();

        PromotionCandidates {
            baseline_size: self.baseline.len(),
            baseline_size_after: self.baseline.len() + candidates.len(),
            candidates,
        }
    }

    /// Folds entries kept under the legacy key into the personal set, then
    /// removes the legacy key. Legacy entries win on matching dates.
    ///
    /// Returns the number of entries migrated.
    pub async fn migrate_legacy(&self) -> Result<usize, StorageError> {
        let Some(raw) = self.store.get(LEGACY_OVERRIDES_KEY).await? else {
            return Ok(0);
        };
        let Some(legacy) = decode_entries(LEGACY_OVERRIDES_KEY, &raw) else {
            return Ok(0);
        };

        let migrated = legacy.len();
        if migrated > 0 {
            let personal = self.load_personal().await;
            self.save_personal(&merge_overrides(&personal, &legacy)).await?;
        }
        self.store.remove(LEGACY_OVERRIDES_KEY).await?;

        tracing::info!(migrated, "migrated legacy personal overrides");
        Ok(migrated)
    }
}
