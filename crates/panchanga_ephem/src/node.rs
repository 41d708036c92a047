//! Mean ascending node of the Moon (Rahu).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 47.7.

use panchanga_frames::normalize_deg;

/// Mean node longitude, mean equinox of date, for `t` centuries (TT).
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_deg(
        125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t * t + t.powi(3) / 467_441.0
            - t.powi(4) / 60_616_000.0,
    )
}
