//! Birth balance from the Moon's position within its nakshatra.

use serde::Serialize;

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Remaining days of the entry period.
    pub balance_days: f64,
}

/// `entry_period_days` is the full length of the starting lord's period.
pub fn birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> BirthBalance {
    let pos = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = pos.fraction_elapsed();
    BirthBalance {
        nakshatra: pos.nakshatra,
        elapsed_fraction,
        balance_days: entry_period_days * (1.0 - elapsed_fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    #[test]
    fn balance_at_start_of_nakshatra() {
        let b = birth_balance(0.0, 2555.75);
        assert_eq!(b.nakshatra, Nakshatra::Ashwini);
        assert!((b.balance_days - 2555.75).abs() < 1e-10);
        assert!(b.elapsed_fraction.abs() < 1e-10);
    }

    #[test]
    fn balance_at_midpoint() {
        let b = birth_balance(NAKSHATRA_SPAN / 2.0, 2555.75);
        assert!((b.elapsed_fraction - 0.5).abs() < 1e-10);
        assert!((b.balance_days - 2555.75 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn balance_near_end_is_small() {
        let b = birth_balance(NAKSHATRA_SPAN - 0.001, 2555.75);
        assert_eq!(b.nakshatra, Nakshatra::Ashwini);
        assert!(b.balance_days < 1.0);
    }

    #[test]
    fn balance_wraps() {
        assert_eq!(birth_balance(-1.0, 1000.0).nakshatra, Nakshatra::Revati);
    }
}
