//! Time handling for the panchanga engine.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions
//! - ΔT (TT − UT) polynomial approximation
//! - `UtcTime`, the public instant type, with chrono interop
//! - Civil offsets (explicit or longitude-derived) and local calendar dates
//! - Greenwich and local sidereal time
//!
//! Every public Julian Date in the workspace is on the UTC scale unless its
//! name says otherwise (`jd_tt`).

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use civil::{CivilOffset, MAX_OFFSET_MINUTES, weekday_from_index, weekday_index};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, julian_centuries, julian_year,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
