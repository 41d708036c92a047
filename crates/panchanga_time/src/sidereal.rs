//! Earth Rotation Angle and Greenwich/local sidereal time.
//!
//! UT Julian Dates are used directly as UT1; the sub-second UT1−UTC
//! difference is far below calendar precision.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, julian_centuries};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t.powi(2)
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time for an east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2000-Jan-01 0h UT: GMST = 6h 39m 51s ≈ 99.97°.
    #[test]
    fn gmst_j2000_midnight() {
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.97).abs() < 0.05, "GMST = {deg}°");
    }

    /// Meeus Example 12.a: 1987 April 10 0h UT, GMST = 13h 10m 46.3668s.
    #[test]
    fn gmst_meeus_example() {
        let deg = gmst_rad(2_446_895.5).to_degrees();
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert!((deg - expected).abs() < 0.01, "GMST = {deg}°, want {expected}°");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let diff = (local_sidereal_time_rad(jd, 90.0) - gmst_rad(jd)).rem_euclid(TAU);
        assert!((diff - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn era_range() {
        for jd in [2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let theta = earth_rotation_angle_rad(jd);
            assert!((0.0..TAU).contains(&theta), "ERA out of range: {theta}");
        }
    }
}
