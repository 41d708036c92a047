//! Civil (wall-clock) offsets and local calendar dates.
//!
//! Civil days decide which Vedic day a query belongs to. When no explicit
//! offset is given the offset is approximated from longitude as
//! `round(lon / 15)` hours, which can misplace instants within an hour or
//! so of local midnight.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;
use crate::utc_time::jd_to_datetime;

/// Largest accepted |offset|, 14 hours.
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Offset of local civil time from UTC, in whole minutes east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilOffset {
    minutes: i32,
}

impl CivilOffset {
    pub const UTC: Self = Self { minutes: 0 };

    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::OffsetOutOfRange(minutes));
        }
        Ok(Self { minutes })
    }

    /// Mean-solar zone offset: whole hours nearest `lon / 15`.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let hours = (longitude_deg / 15.0).round().clamp(-12.0, 14.0) as i32;
        Self {
            minutes: hours * 60,
        }
    }

    /// The explicit offset if given, else the longitude approximation.
    pub fn resolve(explicit: Option<i32>, longitude_deg: f64) -> Result<Self, TimeError> {
        match explicit {
            Some(m) => Self::from_minutes(m),
            None => Ok(Self::from_longitude(longitude_deg)),
        }
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    pub fn as_days(self) -> f64 {
        f64::from(self.minutes) / MINUTES_PER_DAY
    }

    /// Local wall-clock reading of a JD UTC.
    pub fn to_local(self, jd_utc: f64) -> Result<NaiveDateTime, TimeError> {
        Ok(jd_to_datetime(jd_utc + self.as_days())?.naive_utc())
    }

    /// Local civil date containing a JD UTC.
    pub fn local_date(self, jd_utc: f64) -> Result<NaiveDate, TimeError> {
        Ok(self.to_local(jd_utc)?.date())
    }

    /// JD UTC of local 00:00 on `date`.
    pub fn local_midnight_jd(self, date: NaiveDate) -> f64 {
        calendar_to_jd(date.year(), date.month(), f64::from(date.day())) - self.as_days()
    }
}

/// Weekday index with Sunday = 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// chrono weekday for a Sunday-based index.
pub fn weekday_from_index(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
