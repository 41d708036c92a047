//! Nutation in longitude and obliquity, four-term series.
//!
//! Accurate to about 0.5″ in Δψ and 0.1″ in Δε, which is plenty for
//! longitudes consumed at arc-minute precision.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22.

/// Nutation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude_deg: f64,
    /// Δε, nutation in obliquity.
    pub obliquity_deg: f64,
}

/// Nutation for `t` Julian centuries (TT) since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_deg: dpsi / 3600.0,
        obliquity_deg: deps / 3600.0,
    }
}
