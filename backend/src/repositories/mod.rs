pub mod overrides;
pub mod settings;
pub mod storage;

pub use overrides::{OverrideRepository, PromotionCandidates, StorageInfo};
pub use settings::{AppSettings, AppSettingsPatch, CalculationMode, SettingsRepository};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
