use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A wall-clock time of day with minute precision, written as `HH:MM`.
///
/// Stored as minutes since midnight, so ordering matches the ordering of the
/// zero-padded `HH:MM` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("time `{0}` is incomplete; both hour and minute are required")]
    Incomplete(String),
    #[error("time `{0}` is not a valid HH:MM value")]
    Invalid(String),
}

impl ClockTime {
    /// Builds a time from known-good components. Callers pass literals.
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        Self {
            minutes: hour as u16 * MINUTES_PER_HOUR + minute as u16,
        }
    }

    pub fn try_from_hm(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| Self::from_hm(hour, minute))
    }

    pub const fn hour(self) -> u8 {
        (self.minutes / MINUTES_PER_HOUR) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.minutes % MINUTES_PER_HOUR) as u8
    }

    /// Minutes from `self` to `later`, zero when `later` is not after `self`.
    pub fn minutes_until(self, later: ClockTime) -> u32 {
        u32::from(later.minutes.saturating_sub(self.minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| ClockTimeError::Incomplete(trimmed.to_string()))?;

        if hour.is_empty() || minute.is_empty() {
            return Err(ClockTimeError::Incomplete(trimmed.to_string()));
        }

        let digits = |part: &str| part.len() <= 2 && part.chars().all(|c| c.is_ascii_digit());
        if !digits(hour) || !digits(minute) {
            return Err(ClockTimeError::Invalid(trimmed.to_string()));
        }

        let hour: u8 = hour
            .parse()
            .map_err(|_| ClockTimeError::Invalid(trimmed.to_string()))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ClockTimeError::Invalid(trimmed.to_string()))?;

        let time = Self::try_from_hm(hour, minute)
            .ok_or_else(|| ClockTimeError::Invalid(trimmed.to_string()))?;
        debug_assert!(time.minutes < MINUTES_PER_DAY);
        Ok(time)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Splits a minute total into whole hours and the remaining minutes.
pub fn split_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

/// Formats a minute total for logs and summaries, e.g. `8h 30m`, `45m`, `0m`.
pub fn format_work_duration(total_minutes: u32) -> String {
    let (hours, minutes) = split_minutes(total_minutes);
    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Returns the current UTC time, used to stamp stored records.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_time() {
        let time: ClockTime = "08:30".parse().unwrap();
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.to_string(), "08:30");
    }

    #[test]
    fn parses_single_digit_hour() {
        let time: ClockTime = "9:05".parse().unwrap();
        assert_eq!(time, ClockTime::from_hm(9, 5));
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn missing_minute_is_incomplete() {
        assert!(matches!(
            "09:".parse::<ClockTime>(),
            Err(ClockTimeError::Incomplete(_))
        ));
        assert!(matches!(
            "09".parse::<ClockTime>(),
            Err(ClockTimeError::Incomplete(_))
        ));
        assert!(matches!(
            ":30".parse::<ClockTime>(),
            Err(ClockTimeError::Incomplete(_))
        ));
    }

    #[test]
    fn out_of_range_is_invalid() {
        assert!(matches!(
            "24:00".parse::<ClockTime>(),
            Err(ClockTimeError::Invalid(_))
        ));
        assert!(matches!(
            "12:60".parse::<ClockTime>(),
            Err(ClockTimeError::Invalid(_))
        ));
        assert!(matches!(
            "ab:cd".parse::<ClockTime>(),
            Err(ClockTimeError::Invalid(_))
        ));
    }

    #[test]
    fn ordering_matches_string_ordering() {
        let samples = ["00:00", "08:30", "09:05", "12:30", "13:30", "17:30", "23:59"];
        for a in samples {
            for b in samples {
                let ta: ClockTime = a.parse().unwrap();
                let tb: ClockTime = b.parse().unwrap();
                assert_eq!(ta.cmp(&tb), a.cmp(b), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn minutes_until_saturates() {
        let morning = ClockTime::from_hm(8, 30);
        let noon = ClockTime::from_hm(12, 30);
        assert_eq!(morning.minutes_until(noon), 240);
        assert_eq!(noon.minutes_until(morning), 0);
    }

    #[test]
    fn serde_uses_hh_mm_strings() {
        let json = serde_json::to_string(&ClockTime::from_hm(13, 5)).unwrap();
        assert_eq!(json, "\"13:05\"");
        let parsed: ClockTime = serde_json::from_str("\"17:30\"").unwrap();
        assert_eq!(parsed, ClockTime::from_hm(17, 30));
        assert!(serde_json::from_str::<ClockTime>("\"17:\"").is_err());
    }

    #[test]
    fn format_work_duration_variants() {
        assert_eq!(format_work_duration(0), "0m");
        assert_eq!(format_work_duration(45), "45m");
        assert_eq!(format_work_duration(480), "8h");
        assert_eq!(format_work_duration(510), "8h 30m");
    }
}
