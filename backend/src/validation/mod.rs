//! Caller-side input checks for calculation and override payloads.
//!
//! The calculation engine assumes its preconditions hold; handlers run these
//! rules (through `validator` derives) before calling into it.

pub mod rules;

pub use validator::Validate;
