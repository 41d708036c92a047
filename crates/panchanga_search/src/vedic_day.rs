//! Vedic day bounds: sunrise to next sunrise.
//!
//! The civil date of the opening sunrise names the day. An instant before
//! local sunrise belongs to the previous date's Vedic day. Where the Sun
//! does not rise (or set) the day falls back to the local civil day and is
//! flagged `polar`; everything that needs a sunrise or sunset then degrades
//! to absent.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::Serialize;
use tracing::warn;

use panchanga_ephem::{
    EphemerisGateway, GeoLocation, LunarEvent, RiseSetConfig, RiseSetEvent, compute_rise_set,
    lunar_event_within,
};
use panchanga_time::{CivilOffset, TimeError};
use panchanga_vedic_base::TimeWindow;

use crate::error::SearchError;

/// Reject coordinates outside the globe before any search runs.
pub fn validate_location(location: &GeoLocation) -> Result<(), SearchError> {
    let GeoLocation {
        latitude_deg,
        longitude_deg,
        altitude_m,
    } = *location;
    if !(latitude_deg.is_finite() && longitude_deg.is_finite() && altitude_m.is_finite()) {
        return Err(SearchError::InvalidLocation("coordinates must be finite"));
    }
    if !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(SearchError::InvalidLocation("latitude must be within [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(SearchError::InvalidLocation("longitude must be within [-180, 180]"));
    }
    if !(-500.0..=10_000.0).contains(&altitude_m) {
        return Err(SearchError::InvalidLocation("altitude must be within [-500, 10000] m"));
    }
    Ok(())
}

pub(crate) fn shift_date(date: NaiveDate, days: i64) -> Result<NaiveDate, SearchError> {
    date.checked_add_signed(TimeDelta::days(days)).ok_or(SearchError::Time(TimeError::InvalidDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    }))
}

/// Sunrise or sunset on civil `date` at `location`, `None` at polar
/// latitudes.
///
/// The search is anchored at civil noon of `date` under `offset`, so the
/// event found is the one of the local date even where the zone runs a
/// day ahead of the longitude (Samoa, Kiribati).
pub fn solar_event<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    date: NaiveDate,
    offset: CivilOffset,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> Result<Option<f64>, SearchError> {
    let noon = offset.local_midnight_jd(date) + 0.5;
    Ok(compute_rise_set(gateway, location, event, noon, config)?.jd())
}

/// Moonrise and moonset on one civil date; either may not occur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonEvents {
    pub moonrise: Option<f64>,
    pub moonset: Option<f64>,
}

/// First moonrise and moonset between local midnights of `date`.
pub fn moon_events_on<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    date: NaiveDate,
    offset: CivilOffset,
    config: &RiseSetConfig,
) -> Result<MoonEvents, SearchError> {
    let start = offset.local_midnight_jd(date);
    let end = offset.local_midnight_jd(shift_date(date, 1)?);
    let event = |e| lunar_event_within(gateway, location, e, start, end, config);
    Ok(MoonEvents {
        moonrise: event(LunarEvent::Moonrise)?,
        moonset: event(LunarEvent::Moonset)?,
    })
}

/// One Vedic day and the solar events around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VedicDay {
    /// Civil date of the opening sunrise.
    pub date: NaiveDate,
    pub sunrise: Option<f64>,
    pub sunset: Option<f64>,
    pub next_sunrise: Option<f64>,
    /// Sunset of the previous date; opens the night before `sunrise`.
    pub prev_sunset: Option<f64>,
    /// `[sunrise, next_sunrise)`, or the civil day when `polar`.
    pub window: TimeWindow,
    pub polar: bool,
}

impl VedicDay {
    /// Sunrise to sunset.
    pub fn day_span(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.sunrise?, self.sunset?)
    }

    /// Sunset to next sunrise.
    pub fn night_span(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.sunset?, self.next_sunrise?)
    }

    /// Previous sunset to sunrise.
    pub fn preceding_night(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.prev_sunset?, self.sunrise?)
    }
}

/// Vedic day opened by the sunrise of civil `date`.
pub fn vedic_day_for_date<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    date: NaiveDate,
    offset: CivilOffset,
    config: &RiseSetConfig,
) -> Result<VedicDay, SearchError> {
    let next_date = shift_date(date, 1)?;
    let event = |d, e| solar_event(gateway, location, d, offset, e, config);
    let sunrise = event(date, RiseSetEvent::Sunrise)?;
    let sunset = event(date, RiseSetEvent::Sunset)?;
    let next_sunrise = event(next_date, RiseSetEvent::Sunrise)?;
    let prev_sunset = event(shift_date(date, -1)?, RiseSetEvent::Sunset)?;

    let solar_window = sunrise.zip(next_sunrise).and_then(|(a, b)| TimeWindow::new(a, b));
    let (window, polar) = match solar_window {
        Some(w) => (w, false),
        None => {
            warn!(%date, lat = location.latitude_deg, "no sunrise pair; using civil day bounds");
            let civil = TimeWindow::new(offset.local_midnight_jd(date), offset.local_midnight_jd(next_date))
                .ok_or(SearchError::NonFinite("civil day bounds"))?;
            (civil, true)
        }
    };

    Ok(VedicDay {
        date,
        sunrise,
        sunset,
        next_sunrise,
        prev_sunset,
        window,
        polar,
    })
}

/// Vedic day containing `jd_ut`.
pub fn vedic_day_containing<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    jd_ut: f64,
    offset: CivilOffset,
    config: &RiseSetConfig,
) -> Result<VedicDay, SearchError> {
    let date = offset.local_date(jd_ut)?;
    let day = vedic_day_for_date(gateway, location, date, offset, config)?;
    match day.sunrise {
        Some(sr) if jd_ut < sr => vedic_day_for_date(gateway, location, shift_date(date, -1)?, offset, config),
        _ => Ok(day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_ephem::AnalyticEphemeris;
    use panchanga_time::UtcTime;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090, 0.0)
    }

    fn ist() -> CivilOffset {
        CivilOffset::from_minutes(330).unwrap()
    }

    #[test]
    fn early_morning_belongs_to_previous_day() {
        let gw = AnalyticEphemeris::new();
        // 2026-02-16 04:00 IST.
        let jd = UtcTime::new(2026, 2, 15, 22, 30, 0.0).to_jd_utc();
        let day = vedic_day_containing(&gw, &delhi(), jd, ist(), &RiseSetConfig::default()).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
        assert!(day.window.contains(jd));
        assert!(!day.polar);
    }

    #[test]
    fn spans_are_ordered() {
        let gw = AnalyticEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let day = vedic_day_for_date(&gw, &delhi(), date, ist(), &RiseSetConfig::default()).unwrap();
        let d = day.day_span().unwrap();
        let n = day.night_span().unwrap();
        let p = day.preceding_night().unwrap();
        assert_eq!(d.end_jd, n.start_jd);
        assert_eq!(p.end_jd, d.start_jd);
        assert_eq!(n.end_jd, day.window.end_jd);
        let hours = d.duration_days() * 24.0;
        assert!((11.0..12.0).contains(&hours), "{hours}");
    }

    #[test]
    fn polar_night_falls_back_to_civil_day() {
        let gw = AnalyticEphemeris::new();
        let tromso = GeoLocation::new(69.65, 18.96, 0.0);
        let offset = CivilOffset::from_minutes(60).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
        let day = vedic_day_for_date(&gw, &tromso, date, offset, &RiseSetConfig::default()).unwrap();
        assert!(day.polar);
        assert!(day.sunrise.is_none());
        assert!(day.day_span().is_none());
        assert!((day.window.duration_days() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn date_line_zone_keeps_local_date() {
        let gw = AnalyticEphemeris::new();
        let apia = GeoLocation::new(-13.83, -171.76, 0.0);
        let offset = CivilOffset::from_minutes(780).unwrap();
        // 2026-02-15 10:00 in Apia.
        let jd = UtcTime::new(2026, 2, 14, 21, 0, 0.0).to_jd_utc();
        let day = vedic_day_containing(&gw, &apia, jd, offset, &RiseSetConfig::default()).unwrap();
        let feb15 = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        assert_eq!(day.date, feb15);
        assert_eq!(offset.local_date(day.sunrise.unwrap()).unwrap(), feb15);
        assert!(day.window.contains(jd));
        assert_eq!(panchanga_vedic_base::Vaar::from_date(day.date), panchanga_vedic_base::Vaar::Ravivaar);
    }

    #[test]
    fn moon_events_fall_on_the_civil_date() {
        let gw = AnalyticEphemeris::new();
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let m = moon_events_on(&gw, &delhi(), date, ist(), &RiseSetConfig::default()).unwrap();
        for jd in [m.moonrise.unwrap(), m.moonset.unwrap()] {
            assert_eq!(ist().local_date(jd).unwrap(), date);
        }
        // Waning crescent: up before the Sun.
        let day = vedic_day_for_date(&gw, &delhi(), date, ist(), &RiseSetConfig::default()).unwrap();
        assert!(m.moonrise.unwrap() < day.sunrise.unwrap());
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(validate_location(&GeoLocation::new(91.0, 0.0, 0.0)).is_err());
        assert!(validate_location(&GeoLocation::new(0.0, f64::NAN, 0.0)).is_err());
        assert!(validate_location(&delhi()).is_ok());
    }
}
