// File: ./src/error.rs
//! Typed errors for the domain boundaries callers need to match on.
//!
//! Everything else (config, filesystem) travels as `anyhow::Error` with context.

/// Failure to turn a Bikram Sambat date into a Gregorian one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// No calendar data was available to the adapter.
    #[error("BS calendar data is unavailable: {0}")]
    Unavailable(String),

    /// The BS year is outside the range covered by the calendar data.
    #[error("BS year {year} is outside the supported range {first}-{last}")]
    YearOutOfRange { year: i32, first: i32, last: i32 },

    /// The AD date falls outside the range covered by the calendar data.
    #[error("AD date {0} is outside the supported calendar range")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("invalid BS month {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Day is zero or exceeds the length of the month in that year.
    #[error("invalid BS date {year}-{month:02}-{day:02} (month has {month_len} days)")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        month_len: u32,
    },
}

/// Rejected user input when building a festival record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },
}
