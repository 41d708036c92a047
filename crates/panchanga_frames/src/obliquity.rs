//! Obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 (IAU 1980).

use crate::nutation::Nutation;

/// Mean obliquity at J2000.0: 23° 26′ 21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of date for `t` Julian centuries (TT) since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG + (-46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t) / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64, nut: &Nutation) -> f64 {
    mean_obliquity_deg(t) + nut.obliquity_deg
}
