//! Error types for time conversions.

use thiserror::Error;

/// Errors from calendar conversion, parsing, or civil-offset handling.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day does not name a real Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute, or second outside its range.
    #[error("invalid time of day: {0}")]
    InvalidTime(&'static str),
    /// Julian Date is NaN or infinite.
    #[error("non-finite Julian date")]
    NonFinite,
    /// Julian Date cannot be represented as a calendar instant.
    #[error("Julian date {0} outside the representable range")]
    OutOfRange(f64),
    /// Civil offset beyond ±14 hours.
    #[error("civil offset {0} minutes outside ±14 h")]
    OffsetOutOfRange(i32),
    /// Text could not be parsed as an instant.
    #[error("cannot parse time {0:?}")]
    Parse(String),
}
