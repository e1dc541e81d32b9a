pub mod baseline;

pub use baseline::baseline_overrides;
