use std::sync::Arc;

use crate::{
    config::Config,
    data::baseline_overrides,
    models::day_override::OverrideSet,
    repositories::{KeyValueStore, OverrideRepository, SettingsRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub overrides: OverrideRepository,
    pub settings: SettingsRepository,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: Config) -> Self {
        let baseline = if config.include_baseline {
            baseline_overrides()
        } else {
            OverrideSet::new()
        };

        Self {
            overrides: OverrideRepository::new(store.clone(), baseline),
            settings: SettingsRepository::new(store),
            config,
        }
    }
}
