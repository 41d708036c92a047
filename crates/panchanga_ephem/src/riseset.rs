//! Sunrise/sunset by iterative hour-angle refinement.
//!
//! Starting from approximate local noon, the Sun's transit is located from
//! its hour angle, then the event is refined by recomputing the Sun's
//! declination and the semi-diurnal arc at each estimate.
//!
//! The Moon moves too fast for that iteration and may rise or set zero,
//! one or two times in a civil day, so [`lunar_event_within`] scans its
//! altitude over a window and bisects the first horizon crossing.
//!
//! Sources: Meeus Ch. 15; Montenbruck & Pfleger, "Astronomy on the
//! Personal Computer", Ch. 3.

use std::f64::consts::{PI, TAU};

use panchanga_time::local_sidereal_time_rad;

use crate::error::EphemError;
use crate::gateway::EphemerisGateway;
use crate::riseset_types::{GeoLocation, LunarEvent, RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle advances one sidereal revolution per sidereal day.
const SIDEREAL_RATE_RAD_PER_DAY: f64 = TAU * 1.002_737_811_911_354_6;

/// Sampling step of the lunar altitude scan, days.
const LUNAR_SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;

/// Approximate local solar noon JD from 0h UT JD and east longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Semi-diurnal arc for the configured horizon, or the polar outcome.
fn semi_diurnal_arc(
    phi: f64,
    dec_deg: f64,
    depression_deg: f64,
) -> Result<f64, RiseSetResult> {
    let h0 = (-depression_deg).to_radians();
    let dec = dec_deg.to_radians();
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        Err(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Err(RiseSetResult::NeverSets)
    } else {
        Ok(cos_h.acos())
    }
}

/// Compute one sunrise or sunset near `jd_ut_noon`.
///
/// `jd_ut_noon` should be approximate local noon of the wanted date; see
/// [`approximate_local_noon_jd`]. Sunrise is the event before that noon and
/// sunset the one after it.
pub fn compute_rise_set<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    if !jd_ut_noon.is_finite() {
        return Err(EphemError::NonFinite("jd_ut_noon"));
    }
    let phi = location.latitude_rad();
    let depression = config.horizon_depression_deg(location.altitude_m);

    let sun = gateway.sun_equatorial(jd_ut_noon)?;
    let h0 = match semi_diurnal_arc(phi, sun.dec_deg, depression) {
        Ok(h) => h,
        Err(polar) => return Ok(polar),
    };

    let lst_noon = local_sidereal_time_rad(jd_ut_noon, location.longitude_deg);
    let ha_noon = wrap_pi(lst_noon - sun.ra_deg.to_radians());
    let jd_transit = jd_ut_noon - ha_noon / SIDEREAL_RATE_RAD_PER_DAY;

    let h0_days = h0 / SIDEREAL_RATE_RAD_PER_DAY;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let sun_i = gateway.sun_equatorial(jd_event)?;
        let h_target = match semi_diurnal_arc(phi, sun_i.dec_deg, depression) {
            Ok(h) => h,
            Err(polar) => return Ok(polar),
        };

        let lst = local_sidereal_time_rad(jd_event, location.longitude_deg);
        let ha_actual = wrap_pi(lst - sun_i.ra_deg.to_radians());
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE_RAD_PER_DAY;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_ut: jd_event,
        event,
    })
}

/// Altitude of the Moon's centre above the altitude at which its upper
/// limb touches the apparent horizon, degrees.
///
/// Meeus Ch. 15: h0 = 0.7275 π − refraction, less the observer's dip.
fn lunar_altitude_excess<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    jd_ut: f64,
    config: &RiseSetConfig,
) -> Result<f64, EphemError> {
    let moon = gateway.moon_equatorial(jd_ut)?;
    let phi = location.latitude_rad();
    let dec = moon.dec_deg.to_radians();
    let ha = local_sidereal_time_rad(jd_ut, location.longitude_deg) - moon.ra_deg.to_radians();
    let altitude = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos())
        .asin()
        .to_degrees();
    let h0 = 0.7275 * moon.parallax_deg
        - config.refraction_arcmin / 60.0
        - config.dip_deg(location.altitude_m);
    Ok(altitude - h0)
}

/// First moonrise or moonset in `[start_jd, end_jd)`, `None` when the Moon
/// does not cross the horizon that way inside the window.
pub fn lunar_event_within<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    location: &GeoLocation,
    event: LunarEvent,
    start_jd: f64,
    end_jd: f64,
    config: &RiseSetConfig,
) -> Result<Option<f64>, EphemError> {
    if !start_jd.is_finite() || !end_jd.is_finite() {
        return Err(EphemError::NonFinite("lunar event window"));
    }
    let crossed = |before: f64, after: f64| {
        if event.is_rising() {
            before < 0.0 && after >= 0.0
        } else {
            before >= 0.0 && after < 0.0
        }
    };

    let mut a = start_jd;
    let mut fa = lunar_altitude_excess(gateway, location, a, config)?;
    while a < end_jd {
        let b = (a + LUNAR_SCAN_STEP_DAYS).min(end_jd);
        let fb = lunar_altitude_excess(gateway, location, b, config)?;
        if crossed(fa, fb) {
            let (mut lo, mut hi) = (a, b);
            while hi - lo > CONVERGENCE_DAYS {
                let mid = 0.5 * (lo + hi);
                let fm = lunar_altitude_excess(gateway, location, mid, config)?;
                if crossed(fa, fm) {
                    hi = mid;
                } else {
                    lo = mid;
                    fa = fm;
                }
            }
            let jd = 0.5 * (lo + hi);
            return Ok((jd < end_jd).then_some(jd));
        }
        a = b;
        fa = fb;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::AnalyticEphemeris;

    const NEW_DELHI: GeoLocation = GeoLocation {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
        altitude_m: 0.0,
    };

    /// 2026-02-15 0h UT.
    const JD_0H: f64 = 2_461_086.5;

    fn event_jd(loc: &GeoLocation, event: RiseSetEvent) -> RiseSetResult {
        let noon = approximate_local_noon_jd(JD_0H, loc.longitude_deg);
        compute_rise_set(&AnalyticEphemeris, loc, event, noon, &RiseSetConfig::default()).unwrap()
    }

    #[test]
    fn local_noon_east_90() {
        let noon = approximate_local_noon_jd(2_460_000.5, 90.0);
        assert!((noon - 2_460_000.75).abs() < 1e-10);
    }

    /// New Delhi, 2026-02-15: sunrise ≈ 07:00 IST (01:30 UT), sunset ≈ 18:11 IST (12:41 UT).
    #[test]
    fn new_delhi_february() {
        let rise = event_jd(&NEW_DELHI, RiseSetEvent::Sunrise).jd().unwrap();
        let set = event_jd(&NEW_DELHI, RiseSetEvent::Sunset).jd().unwrap();
        let rise_ut_h = (rise - JD_0H) * 24.0;
        let set_ut_h = (set - JD_0H) * 24.0;
        assert!((rise_ut_h - 1.50).abs() < 0.1, "sunrise {rise_ut_h} h UT");
        assert!((set_ut_h - 12.68).abs() < 0.1, "sunset {set_ut_h} h UT");
    }

    #[test]
    fn polar_day_and_night() {
        // Lat 80°N in mid-February: Sun never rises.
        let arctic = GeoLocation::new(80.0, 15.0, 0.0);
        assert_eq!(event_jd(&arctic, RiseSetEvent::Sunrise), RiseSetResult::NeverRises);
        // Lat 80°S at the same date: Sun never sets.
        let antarctic = GeoLocation::new(-80.0, 15.0, 0.0);
        assert_eq!(event_jd(&antarctic, RiseSetEvent::Sunset), RiseSetResult::NeverSets);
    }

    /// New Delhi, 2026-02-15, two days before new moon: the waning
    /// crescent rises shortly before the Sun and sets in the afternoon.
    #[test]
    fn moon_rises_with_the_sun_near_new_moon() {
        let gw = AnalyticEphemeris;
        let cfg = RiseSetConfig::default();
        let start = JD_0H - 5.5 / 24.0;
        let rise = lunar_event_within(&gw, &NEW_DELHI, LunarEvent::Moonrise, start, start + 1.0, &cfg)
            .unwrap()
            .unwrap();
        let set = lunar_event_within(&gw, &NEW_DELHI, LunarEvent::Moonset, start, start + 1.0, &cfg)
            .unwrap()
            .unwrap();
        let sunrise = event_jd(&NEW_DELHI, RiseSetEvent::Sunrise).jd().unwrap();
        assert!(rise < sunrise && sunrise - rise < 2.5 / 24.0, "moonrise {rise} sunrise {sunrise}");
        assert!(set > rise && set - rise < 0.6);
    }

    #[test]
    fn lunar_events_respect_the_window() {
        let gw = AnalyticEphemeris;
        let cfg = RiseSetConfig::default();
        let start = JD_0H - 5.5 / 24.0;
        let rise = lunar_event_within(&gw, &NEW_DELHI, LunarEvent::Moonrise, start, start + 1.0, &cfg)
            .unwrap()
            .unwrap();
        let later = lunar_event_within(&gw, &NEW_DELHI, LunarEvent::Moonrise, rise + 0.01, rise + 0.5, &cfg)
            .unwrap();
        assert_eq!(later, None);
        assert!(
            lunar_event_within(&gw, &NEW_DELHI, LunarEvent::Moonset, f64::NAN, 0.0, &cfg).is_err()
        );
    }

    #[test]
    fn rejects_nan() {
        let r = compute_rise_set(
            &AnalyticEphemeris,
            &NEW_DELHI,
            RiseSetEvent::Sunrise,
            f64::NAN,
            &RiseSetConfig::default(),
        );
        assert!(r.is_err());
    }
}
