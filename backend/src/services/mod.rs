//! Pure calendar calculations. Nothing in here performs I/O.

pub mod day_classifier;
pub mod end_date;
pub mod range_calculator;
pub mod work_hours;

use chrono::NaiveDate;
use thiserror::Error;

pub use day_classifier::{classify, is_weekend, is_workday, month_verdicts, DayVerdict};
pub use end_date::solve_end_date;
pub use range_calculator::calculate_range;
pub use work_hours::{
    calculate_day_work_minutes, calculate_range_work_hours, WorkPeriod, AFTERNOON_PERIOD,
    MORNING_PERIOD, WORK_PERIODS,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(
        "no workday found within {searched_days} days after {start} while counting {day_count} workdays"
    )]
    NoWorkdayWithinBound {
        start: NaiveDate,
        day_count: u32,
        searched_days: u64,
    },
    #[error("date arithmetic left the supported calendar range starting from {0}")]
    DateOutOfRange(NaiveDate),
    #[error("invalid year/month: {year}/{month}")]
    InvalidMonth { year: i32, month: u32 },
}
