//! Data models shared across the calculation engine, storage and API handlers.

pub mod calculation;
pub mod day_override;
