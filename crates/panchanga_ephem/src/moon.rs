//! Lunar position from the main periodic terms of ELP-2000/82.
//!
//! The 59-term Σl series keeps the error near 10″, about 20 seconds of
//! time in tithi and nakshatra boundaries. Latitude and distance use the
//! leading terms of Σb and Σr only; they feed moonrise and moonset, where
//! a few arcminutes are well inside a minute of time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47, Tables
//! 47.A and 47.B.

use panchanga_frames::normalize_deg;

/// Multipliers of (D, M, M′, F) and the sine coefficient in 1e-6 degrees.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0, 0, 1, 0, 6_288_774),
    (2, 0, -1, 0, 1_274_027),
    (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),
    (0, 1, 0, 0, -185_116),
    (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),
    (2, -1, -1, 0, 57_066),
    (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),
    (0, 1, -1, 0, -40_923),
    (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),
    (2, 0, 0, -2, 15_327),
    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),
    (4, 0, -1, 0, 10_675),
    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),
    (2, 1, -1, 0, -7_888),
    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),
    (1, 1, 0, 0, 4_987),
    (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994),
    (4, 0, 0, 0, 3_861),
    (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689),
    (2, 0, -1, 2, -2_602),
    (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348),
    (2, -2, 0, 0, 2_236),
    (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069),
    (2, -2, -1, 0, 2_048),
    (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595),
    (4, -1, -1, 0, 1_215),
    (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892),
    (2, 1, 1, 0, -810),
    (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713),
    (2, 2, -1, 0, -700),
    (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596),
    (4, 0, 1, 0, 549),
    (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520),
    (1, 0, -2, 0, -487),
    (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381),
    (1, 1, 1, 0, 351),
    (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330),
    (2, -1, 2, 0, 327),
    (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299),
    (2, 0, 3, 0, 294),
];

/// Multipliers of (D, M, M′, F) and the cosine coefficient of Σr in
/// metres.
const DISTANCE_TERMS: [(i8, i8, i8, i8, i32); 20] = [
    (0, 0, 1, 0, -20_905_355),
    (2, 0, -1, 0, -3_699_111),
    (2, 0, 0, 0, -2_955_968),
    (0, 0, 2, 0, -569_925),
    (0, 1, 0, 0, 48_888),
    (0, 0, 0, 2, -3_149),
    (2, 0, -2, 0, 246_158),
    (2, -1, -1, 0, -152_138),
    (2, 0, 1, 0, -170_733),
    (2, -1, 0, 0, -204_586),
    (0, 1, -1, 0, -129_620),
    (1, 0, 0, 0, 108_743),
    (0, 1, 1, 0, 104_755),
    (2, 0, 0, -2, 10_321),
    (0, 0, 1, -2, 79_661),
    (4, 0, -1, 0, -34_782),
    (0, 0, 3, 0, -23_210),
    (4, 0, -2, 0, -21_636),
    (2, 1, -1, 0, 24_208),
    (2, 1, 0, 0, 30_824),
];

/// Multipliers of (D, M, M′, F) and the sine coefficient of Σb in 1e-6
/// degrees.
const LATITUDE_TERMS: [(i8, i8, i8, i8, i32); 30] = [
    (0, 0, 0, 1, 5_128_122),
    (0, 0, 1, 1, 280_602),
    (0, 0, 1, -1, 277_693),
    (2, 0, 0, -1, 173_237),
    (2, 0, -1, 1, 55_413),
    (2, 0, -1, -1, 46_271),
    (2, 0, 0, 1, 32_573),
    (0, 0, 2, 1, 17_198),
    (2, 0, 1, -1, 9_266),
    (0, 0, 2, -1, 8_822),
    (2, -1, 0, -1, 8_216),
    (2, 0, -2, -1, 4_324),
    (2, 0, 1, 1, 4_200),
    (2, 1, 0, -1, -3_359),
    (2, -1, -1, 1, 2_463),
    (2, -1, 0, 1, 2_211),
    (2, -1, -1, -1, 2_065),
    (0, 1, -1, -1, -1_870),
    (4, 0, -1, -1, 1_828),
    (0, 1, 0, 1, -1_794),
    (0, 0, 0, 3, -1_749),
    (0, 1, -1, 1, -1_565),
    (1, 0, 0, 1, -1_491),
    (0, 1, 1, 1, -1_475),
    (0, 1, 1, -1, -1_410),
    (0, 1, 0, -1, -1_344),
    (1, 0, 0, -1, -1_335),
    (0, 0, 3, 1, 1_107),
    (4, 0, 0, -1, 1_021),
    (4, 0, -1, 1, 833),
];

/// Mean distance of the Moon's centre, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Fundamental arguments in degrees plus the eccentricity factor `E`.
struct Arguments {
    t: f64,
    l_prime: f64,
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    e: f64,
}

impl Arguments {
    fn new(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            t,
            l_prime: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            m_prime: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
            f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    /// Sum one periodic series; `trig` is `sin` or `cos`.
    fn series(&self, terms: &[(i8, i8, i8, i8, i32)], trig: fn(f64) -> f64) -> f64 {
        let (d, m, mp, f) = (
            self.d.to_radians(),
            self.m.to_radians(),
            self.m_prime.to_radians(),
            self.f.to_radians(),
        );
        terms
            .iter()
            .map(|&(cd, cm, cmp, cf, coeff)| {
                let arg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
                let ecc = match cm.abs() {
                    1 => self.e,
                    2 => self.e * self.e,
                    _ => 1.0,
                };
                f64::from(coeff) * ecc * trig(arg)
            })
            .sum()
    }
}

/// Geometric lunar longitude, mean equinox of date, for `t` centuries (TT).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let a = Arguments::new(t);
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let sigma_l = a.series(&LONGITUDE_TERMS, f64::sin)
        + 3958.0 * a1.to_radians().sin()
        + 1962.0 * (a.l_prime - a.f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();
    normalize_deg(a.l_prime + sigma_l / 1.0e6)
}

/// Geocentric ecliptic latitude of the Moon, degrees.
pub fn moon_latitude_deg(t: f64) -> f64 {
    let a = Arguments::new(t);
    let a1 = (119.75 + 131.849 * a.t).to_radians();
    let a3 = (313.45 + 481_266.484 * a.t).to_radians();
    let (l_prime, f, m_prime) = (
        a.l_prime.to_radians(),
        a.f.to_radians(),
        a.m_prime.to_radians(),
    );
    let sigma_b = a.series(&LATITUDE_TERMS, f64::sin) - 2235.0 * l_prime.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (l_prime - m_prime).sin()
        - 115.0 * (l_prime + m_prime).sin();
    sigma_b / 1.0e6
}

/// Earth-Moon distance between centres, km.
pub fn moon_distance_km(t: f64) -> f64 {
    MEAN_DISTANCE_KM + Arguments::new(t).series(&DISTANCE_TERMS, f64::cos) / 1000.0
}

/// Equatorial horizontal parallax for a distance in km, degrees.
pub fn horizontal_parallax_deg(distance_km: f64) -> f64 {
    (6378.14 / distance_km).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Meeus Example 47.a: 1992 April 12, 0h TD, λ = 133.162655°.
    #[test]
    fn meeus_example_47a() {
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        assert_abs_diff_eq!(moon_longitude_deg(t), 133.162_655, epsilon = 2e-3);
    }

    /// Same example: β = -3.229126°, Δ = 368409.7 km, π = 0.991990°.
    #[test]
    fn meeus_example_47a_latitude_and_distance() {
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        assert_abs_diff_eq!(moon_latitude_deg(t), -3.229_126, epsilon = 0.01);
        let distance = moon_distance_km(t);
        assert_abs_diff_eq!(distance, 368_409.7, epsilon = 150.0);
        assert_abs_diff_eq!(horizontal_parallax_deg(distance), 0.991_990, epsilon = 1e-3);
    }

    #[test]
    fn latitude_stays_within_inclination() {
        for k in 0..200 {
            let t = 0.2 + f64::from(k) * 0.01 / 36.525;
            assert!(moon_latitude_deg(t).abs() < 5.35);
        }
    }

    /// Mean motion is about 13.18°/day.
    #[test]
    fn daily_motion() {
        let day = 1.0 / 36_525.0;
        let mut delta = moon_longitude_deg(0.1 + day) - moon_longitude_deg(0.1);
        if delta < 0.0 {
            delta += 360.0;
        }
        assert!((11.5..15.5).contains(&delta), "motion = {delta}°/day");
    }
}
