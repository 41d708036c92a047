//! Julian Day ↔ proleptic Gregorian calendar conversion.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date for a Gregorian calendar date with fractional day.
///
/// `day` may carry a fraction: `15.5` is noon on the 15th.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (f64::from(y) / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * (f64::from(m) + 1.0)).floor() + day + b
        - 1524.5
}

/// Gregorian `(year, month, fractional day)` for a Julian Date.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year (2000.0 at J2000.0), used for ΔT lookup.
pub fn julian_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn j2000_epoch() {
        assert_abs_diff_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD, epsilon = 1e-9);
    }

    /// Meeus Example 7.a: 1957 October 4.81 = JD 2436116.31.
    #[test]
    fn sputnik_launch() {
        assert_abs_diff_eq!(calendar_to_jd(1957, 10, 4.81), 2_436_116.31, epsilon = 1e-6);
    }

    #[test]
    fn inverse_of_meeus_example() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert_abs_diff_eq!(d, 4.81, epsilon = 1e-6);
    }

    #[test]
    fn leap_day_2024() {
        let jd = calendar_to_jd(2024, 2, 29.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m, d.floor() as u32), (2024, 2, 29));
        assert_abs_diff_eq!(calendar_to_jd(2024, 3, 1.0) - jd, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn centuries_one_century_after_j2000() {
        assert_abs_diff_eq!(julian_centuries(J2000_JD + 36_525.0), 1.0, epsilon = 1e-12);
    }
}
