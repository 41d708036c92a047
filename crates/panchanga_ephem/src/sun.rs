//! Low-precision solar theory.
//!
//! Accuracy about 0.01° in longitude over several centuries around J2000,
//! i.e. well under a minute of time in ingress and sunrise instants.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.

use panchanga_frames::{Nutation, normalize_deg};

/// Geometric position of the Sun, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub true_longitude_deg: f64,
    pub distance_au: f64,
}

/// Aberration constant κ = 20.4898″, in degrees.
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric solar longitude and radius vector for `t` centuries (TT).
pub fn solar_position(t: f64) -> SolarPosition {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let m_rad = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let nu = (m + c).to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    SolarPosition {
        true_longitude_deg: normalize_deg(l0 + c),
        distance_au,
    }
}

/// Apparent longitude: nutation in longitude plus annual aberration.
pub fn apparent_longitude_deg(pos: &SolarPosition, nut: &Nutation) -> f64 {
    normalize_deg(pos.true_longitude_deg + nut.longitude_deg - ABERRATION_DEG / pos.distance_au)
}
