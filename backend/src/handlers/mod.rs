pub mod calculate;
pub mod calendar;
pub mod health;
pub mod overrides;
pub mod settings;
pub mod storage;
