use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    services::work_hours::{AFTERNOON_PERIOD, MORNING_PERIOD},
    utils::time::{now_utc, ClockTime},
};

use super::storage::{KeyValueStore, StorageError, APP_SETTINGS_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    #[default]
    Range,
    Duration,
    #[serde(alias = "workhours")]
    WorkHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSpan {
    #[schema(value_type = String, example = "08:30")]
    pub start: ClockTime,
    #[schema(value_type = String, example = "12:30")]
    pub end: ClockTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DefaultWorkHours {
    pub morning: TimeSpan,
    pub afternoon: TimeSpan,
}

impl Default for DefaultWorkHours {
    fn default() -> Self {
        Self {
            morning: TimeSpan {
                start: MORNING_PERIOD.start,
                end: MORNING_PERIOD.end,
            },
            afternoon: TimeSpan {
                start: AFTERNOON_PERIOD.start,
                end: AFTERNOON_PERIOD.end,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppSettings {
    #[serde(alias = "preferredCalculationMode")]
    pub preferred_calculation_mode: CalculationMode,
    #[serde(alias = "defaultWorkHours")]
    pub default_work_hours: DefaultWorkHours,
    #[serde(alias = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferred_calculation_mode: CalculationMode::default(),
            default_work_hours: DefaultWorkHours::default(),
            last_updated: now_utc(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AppSettingsPatch {
    pub preferred_calculation_mode: Option<CalculationMode>,
    pub default_work_hours: Option<DefaultWorkHours>,
}

impl AppSettingsPatch {
    pub fn apply(self, settings: &mut AppSettings) {
        if let Some(mode) = self.preferred_calculation_mode {
            settings.preferred_calculation_mode = mode;
        }
        if let Some(hours) = self.default_work_hours {
            settings.default_work_hours = hours;
        }
    }
}

/// Overlays the stored top-level fields on the defaults. Fields that fail
/// to decode are dropped individually.
fn overlay_on_defaults(raw: &str) -> AppSettings {
    let mut settings = AppSettings::default();

    let stored = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            tracing::warn!("stored app settings are not a JSON object; using defaults");
            return settings;
        }
    };

    for (field, value) in stored {
        let applied = match field.as_str() {
            "preferred_calculation_mode" | "preferredCalculationMode" => {
                serde_json::from_value::<CalculationMode>(value)
                    .map(|mode| settings.preferred_calculation_mode = mode)
            }
            "default_work_hours" | "defaultWorkHours" => {
                serde_json::from_value::<DefaultWorkHours>(value)
                    .map(|hours| settings.default_work_hours = hours)
            }
            "last_updated" | "lastUpdated" => {
                serde_json::from_value::<DateTime<Utc>>(value)
                    .map(|stamp| settings.last_updated = stamp)
            }
            _ => Ok(()),
        };
        if let Err(err) = applied {
            tracing::warn!(field = %field, error = %err, "ignoring stored settings field");
        }
    }

    settings
}

#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> AppSettings {
        match self.store.get(APP_SETTINGS_KEY).await {
            Ok(Some(raw)) => overlay_on_defaults(&raw),
            Ok(None) => AppSettings::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read app settings; using defaults");
                AppSettings::default()
            }
        }
    }

    pub async fn update(&self, patch: AppSettingsPatch) -> Result<AppSettings, StorageError> {
        let mut settings = self.load().await;
        patch.apply(&mut settings);
        settings.last_updated = now_utc();

        let raw = serde_json::to_string(&settings).map_err(|source| {
            StorageError::Serialization {
                key: APP_SETTINGS_KEY.to_string(),
                source,
            }
        })?;
        self.store.set(APP_SETTINGS_KEY, &raw).await?;

        tracing::debug!(mode = ?settings.preferred_calculation_mode, "app settings updated");
        Ok(settings)
    }
}
