//! Cartesian ↔ spherical and ecliptic → equatorial conversion.

/// Ecliptic longitude/latitude with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat_deg: f64,
    /// Distance in AU.
    pub distance_au: f64,
}

/// Right ascension / declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

/// Wrap an angle into [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Ecliptic Cartesian `[x, y, z]` (AU) to spherical.
pub fn cartesian_to_ecliptic(xyz: &[f64; 3]) -> EclipticCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return EclipticCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }
    EclipticCoords {
        lon_deg: normalize_deg(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance_au: r,
    }
}

/// Rotate ecliptic (λ, β) to equatorial (α, δ) for obliquity ε.
///
/// Source: Meeus Eq. 13.3 and 13.4.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let (lam, beta, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();
    EquatorialCoords {
        ra_deg: normalize_deg(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_wraps_negative() {
        assert_abs_diff_eq!(normalize_deg(-30.0), 330.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_deg(720.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn cartesian_axes() {
        let c = cartesian_to_ecliptic(&[0.0, 2.0, 0.0]);
        assert_abs_diff_eq!(c.lon_deg, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.distance_au, 2.0, epsilon = 1e-12);
    }

    /// At the June solstice point the declination equals the obliquity.
    #[test]
    fn solstice_declination() {
        let eq = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert_abs_diff_eq!(eq.ra_deg, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.dec_deg, 23.44, epsilon = 1e-9);
    }

    /// Meeus Example 13.a: Pollux λ=113.215630°, β=6.684170°, ε=23.4392911°
    /// → α=116.328942°, δ=28.026183°.
    #[test]
    fn meeus_pollux() {
        let eq = ecliptic_to_equatorial(113.215_630, 6.684_170, 23.439_291_1);
        assert_abs_diff_eq!(eq.ra_deg, 116.328_942, epsilon = 1e-5);
        assert_abs_diff_eq!(eq.dec_deg, 28.026_183, epsilon = 1e-5);
    }
}
