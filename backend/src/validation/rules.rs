//! Common validation rules shared across request payloads.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::ValidationError;

use crate::utils::time::{ClockTime, ClockTimeError};

pub const LABEL_MAX_CHARS: usize = 100;

/// Largest accepted `day_count` for end-date queries and the longest
/// inclusive range, in days (about a century).
pub const DAY_COUNT_MAX: i64 = 36_525;

fn error_with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validates an override label.
///
/// Requirements:
/// - Not blank after trimming
/// - At most 100 characters
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(error_with_message("label_required", "Label must not be empty"));
    }
    if trimmed.chars().count() > LABEL_MAX_CHARS {
        return Err(error_with_message(
            "label_too_long",
            format!("Label must be at most {} characters", LABEL_MAX_CHARS),
        ));
    }
    Ok(())
}

/// Validates a complete `HH:MM` time, telling apart a half-filled value
/// (`time_incomplete`) from a malformed one (`time_invalid`).
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    match value.parse::<ClockTime>() {
        Ok(_) => Ok(()),
        Err(err @ ClockTimeError::Incomplete(_)) => {
            Err(error_with_message("time_incomplete", err.to_string()))
        }
        Err(err @ ClockTimeError::Invalid(_)) => {
            Err(error_with_message("time_invalid", err.to_string()))
        }
    }
}

pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        return Err(error_with_message(
            "start_after_end",
            format!("start_date {} is after end_date {}", start, end),
        ));
    }
    Ok(())
}

/// Rejects inclusive ranges longer than [`DAY_COUNT_MAX`] days.
pub fn validate_range_span(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    let days = end.signed_duration_since(start).num_days() + 1;
    if days > DAY_COUNT_MAX {
        return Err(error_with_message(
            "range_too_long",
            format!("range covers {} days; at most {} allowed", days, DAY_COUNT_MAX),
        ));
    }
    Ok(())
}

pub fn validate_time_order(start: ClockTime, end: ClockTime) -> Result<(), ValidationError> {
    if start >= end {
        return Err(error_with_message(
            "start_time_not_before_end_time",
            format!("start_time {} must be earlier than end_time {}", start, end),
        ));
    }
    Ok(())
}
