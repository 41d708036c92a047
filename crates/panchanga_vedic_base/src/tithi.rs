//! Tithi (lunar day) and Paksha from the Moon–Sun elongation.
//!
//! Thirty tithis of 12° each: indices 0..=14 are the bright fortnight
//! (Shukla) ending at Purnima, 15..=29 the dark fortnight (Krishna) ending
//! at Amavasya.

use serde::Serialize;

use crate::util::{degrees_in_segment, segment_index};

pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    pub const fn from_tithi_index(index: u8) -> Self {
        if index <= 14 { Self::Shukla } else { Self::Krishna }
    }
}

/// Names of the tithis within a paksha; the 15th differs by paksha.
const TITHI_NAMES: [&str; 14] = [
    "Prathama",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// A tithi by its 0-based index across the synodic month (0..=29).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tithi(u8);

impl Tithi {
    pub const PURNIMA: Tithi = Tithi(14);
    pub const AMAVASYA: Tithi = Tithi(29);

    /// Tithi for any integer index, wrapping modulo 30.
    pub const fn from_index(index: u8) -> Self {
        Self(index % 30)
    }

    /// Tithi from its 1-based number (1..=30).
    pub const fn from_number(number: u8) -> Self {
        Self::from_index((number + 29) % 30)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based number, 1..=30.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub const fn paksha(self) -> Paksha {
        Paksha::from_tithi_index(self.0)
    }

    /// 1..=15 within the paksha.
    pub const fn in_paksha(self) -> u8 {
        self.0 % 15 + 1
    }

    pub const fn name(self) -> &'static str {
        match self.0 {
            14 => "Purnima",
            29 => "Amavasya",
            i => TITHI_NAMES[(i % 15) as usize],
        }
    }
}

/// An elongation resolved to its tithi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    pub paksha: Paksha,
    pub degrees_in_tithi: f64,
}

/// Tithi for a Moon − Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let tithi = Tithi::from_index(segment_index(elongation_deg, TITHI_SPAN, 30));
    TithiPosition {
        tithi,
        paksha: tithi.paksha(),
        degrees_in_tithi: degrees_in_segment(elongation_deg, TITHI_SPAN, 30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_moon_is_shukla_prathama() {
        let p = tithi_from_elongation(0.0);
        assert_eq!(p.tithi.index(), 0);
        assert_eq!(p.tithi.name(), "Prathama");
        assert_eq!(p.paksha, Paksha::Shukla);
    }

    #[test]
    fn purnima_and_amavasya() {
        assert_eq!(tithi_from_elongation(170.0).tithi, Tithi::PURNIMA);
        assert_eq!(tithi_from_elongation(359.0).tithi, Tithi::AMAVASYA);
        assert_eq!(Tithi::AMAVASYA.name(), "Amavasya");
    }

    #[test]
    fn krishna_chaturdashi_is_number_29() {
        let t = Tithi::from_number(29);
        assert_eq!(t.name(), "Chaturdashi");
        assert_eq!(t.paksha(), Paksha::Krishna);
        assert_eq!(t.in_paksha(), 14);
    }

    #[test]
    fn number_round_trip_edges() {
        assert_eq!(Tithi::from_number(1).index(), 0);
        assert_eq!(Tithi::from_number(30).index(), 29);
    }

    proptest! {
        #[test]
        fn shukla_iff_index_le_14(elong in -720.0f64..720.0) {
            let p = tithi_from_elongation(elong);
            prop_assert!(p.tithi.index() < 30);
            prop_assert_eq!(p.paksha == Paksha::Shukla, p.tithi.index() <= 14);
        }
    }
}
