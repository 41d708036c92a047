//! Rashi (zodiac sign): twelve 30° sectors from Mesha.

use serde::Serialize;

use crate::graha::Graha;
use crate::util::{degrees_in_segment, segment_index};

pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Lord of each rashi, indexed by rashi.
const RASHI_LORDS: [Graha; 12] = [
    Graha::Mangal,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Surya,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Shani,
    Graha::Guru,
];

impl Rashi {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for any integer index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// The rashi `n` signs after this one.
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self as i32 + n).rem_euclid(12) as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    pub const fn lord(self) -> Graha {
        RASHI_LORDS[self as usize]
    }

    /// 1-based count from `self` to `other`, inclusive (same sign = 1).
    pub const fn house_from(self, other: Rashi) -> u8 {
        ((other as i32 - self as i32).rem_euclid(12) + 1) as u8
    }
}

/// A sidereal longitude resolved to its rashi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiPosition {
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
}

pub fn rashi_from_longitude(sidereal_lon: f64) -> RashiPosition {
    RashiPosition {
        rashi: Rashi::from_index(segment_index(sidereal_lon, RASHI_SPAN, 12)),
        degrees_in_rashi: degrees_in_segment(sidereal_lon, RASHI_SPAN, 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.9).rashi, Rashi::Meena);
    }

    #[test]
    fn degrees_within_sign() {
        let p = rashi_from_longitude(305.5);
        assert_eq!(p.rashi, Rashi::Kumbha);
        assert!((p.degrees_in_rashi - 5.5).abs() < 1e-9);
    }

    #[test]
    fn lords() {
        assert_eq!(Rashi::Simha.lord(), Graha::Surya);
        assert_eq!(Rashi::Kumbha.lord(), Graha::Shani);
        assert_eq!(Rashi::Meena.lord(), Graha::Guru);
    }

    #[test]
    fn house_counting_is_inclusive() {
        assert_eq!(Rashi::Mesha.house_from(Rashi::Mesha), 1);
        assert_eq!(Rashi::Mesha.house_from(Rashi::Tula), 7);
        assert_eq!(Rashi::Meena.house_from(Rashi::Mesha), 2);
    }

    #[test]
    fn offset_wraps_both_ways() {
        assert_eq!(Rashi::Meena.offset(1), Rashi::Mesha);
        assert_eq!(Rashi::Mesha.offset(-1), Rashi::Meena);
    }
}
