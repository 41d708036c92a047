//! UTC calendar date/time, the public instant type.
//!
//! Converts to and from JD UTC through chrono so that calendar arithmetic
//! (month lengths, leap years, carries at 24:00) is never hand-rolled.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// JD of the Unix epoch, 1970-Jan-01 00:00 UTC.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that the fields name a real instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTime("hour must be 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTime("minute must be 0..=59"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTime("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Julian Date on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar form of a JD UTC, rounded to the millisecond.
    pub fn from_jd_utc(jd_utc: f64) -> Result<Self, TimeError> {
        Ok(Self::from(jd_to_datetime(jd_utc)?))
    }

    pub fn to_chrono(&self) -> Result<DateTime<Utc>, TimeError> {
        self.validate()?;
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos))
            .ok_or(TimeError::InvalidTime("unrepresentable time of day"))?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from(dt.naive_utc())
    }
}

impl From<NaiveDateTime> for UtcTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9,
        }
    }
}

/// JD UTC → chrono instant, millisecond resolution.
pub(crate) fn jd_to_datetime(jd_utc: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd_utc.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let millis = ((jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > 8.0e15 {
        return Err(TimeError::OutOfRange(jd_utc));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange(jd_utc))
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2026-02-15T12:00:00Z`, `2026-02-15T17:30:00+05:30`),
    /// a naive `YYYY-MM-DDTHH:MM:SS` read as UTC, or a bare `YYYY-MM-DD`
    /// read as UTC midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self::from(naive));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::new(date.year(), date.month(), date.day(), 0, 0, 0.0));
        }
        Err(TimeError::Parse(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn jd_of_j2000() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert_abs_diff_eq!(t.to_jd_utc(), 2_451_545.0, epsilon = 1e-9);
    }

    #[test]
    fn from_jd_carries_into_next_day() {
        // 23:59:59.9996 rounds to the next midnight, not to second 60.
        let jd = UtcTime::new(2024, 2, 29, 0, 0, 0.0).to_jd_utc() - 0.0004 / SECONDS_PER_DAY;
        let t = UtcTime::from_jd_utc(jd).unwrap();
        assert_eq!((t.month, t.day, t.hour, t.minute), (2, 29, 0, 0));
    }

    #[test]
    fn from_jd_recovers_minutes() {
        let t = UtcTime::new(2026, 2, 15, 11, 36, 30.0);
        let back = UtcTime::from_jd_utc(t.to_jd_utc()).unwrap();
        assert_eq!((back.hour, back.minute), (11, 36));
        assert_abs_diff_eq!(back.second, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn parse_rfc3339_with_offset() {
        let t: UtcTime = "2026-02-15T17:30:00+05:30".parse().unwrap();
        assert_eq!((t.day, t.hour, t.minute), (15, 12, 0));
    }

    #[test]
    fn parse_bare_date() {
        let t: UtcTime = "2026-06-16".parse().unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour), (2026, 6, 16, 0));
    }

    #[test]
    fn parse_garbage_fails() {
        assert!(matches!("yesterday".parse::<UtcTime>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn validate_rejects_feb_30() {
        let t = UtcTime::new(2026, 2, 30, 0, 0, 0.0);
        assert!(matches!(t.validate(), Err(TimeError::InvalidDate { .. })));
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert_eq!(UtcTime::from_jd_utc(f64::NAN), Err(TimeError::NonFinite));
    }
}
