//! Lagna (ascendant): the ecliptic point rising on the eastern horizon.
//!
//! Formula (Meeus Ch. 13, quadrant-resolved):
//! `λ = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))`
//! with θ the local sidereal time, ε the obliquity and φ the latitude.

use panchanga_frames::normalize_deg;
use panchanga_time::local_sidereal_time_rad;

use crate::riseset_types::GeoLocation;

/// Tropical longitude of the ascendant, degrees in [0, 360).
pub fn lagna_longitude_deg(jd_ut: f64, location: &GeoLocation, obliquity_deg: f64) -> f64 {
    let theta = local_sidereal_time_rad(jd_ut, location.longitude_deg);
    let eps = obliquity_deg.to_radians();
    let phi = location.latitude_rad();
    let asc = theta
        .cos()
        .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_deg(asc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_time::gmst_rad;

    /// Find a JD at Greenwich where GMST is (nearly) zero.
    fn jd_with_gmst_zero() -> f64 {
        let jd0 = 2_460_000.5;
        let gmst = gmst_rad(jd0);
        jd0 + (std::f64::consts::TAU - gmst) / (std::f64::consts::TAU * 1.002_737_811_911_354_6)
    }

    /// With 0° Aries culminating at the equator, 0° Cancer is rising.
    #[test]
    fn equator_equinox_culminating() {
        let asc = lagna_longitude_deg(jd_with_gmst_zero(), &GeoLocation::new(0.0, 0.0, 0.0), 23.44);
        let d = (asc - 90.0).abs();
        assert!(d < 0.05, "ascendant {asc}");
    }

    /// Ascendant sweeps the full zodiac in a sidereal day.
    #[test]
    fn advances_through_the_day() {
        let loc = GeoLocation::new(28.6, 77.2, 0.0);
        let jd = 2_460_000.5;
        let a = lagna_longitude_deg(jd, &loc, 23.44);
        let b = lagna_longitude_deg(jd + 1.0 / 24.0, &loc, 23.44);
        let step = (b - a).rem_euclid(360.0);
        assert!(step > 5.0 && step < 40.0, "one hour moved {step}°");
    }
}
