//! Nakshatra (lunar mansion): 27 equal sectors of 13°20′, four padas each.

use serde::Serialize;

use crate::util::{degrees_in_segment, segment_index};

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 3°20′.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

impl Nakshatra {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra for any integer index, wrapping modulo 27.
    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }

    pub const fn name(self) -> &'static str {
        NAKSHATRA_NAMES[self as usize]
    }

    /// Ecliptic longitude where this nakshatra begins.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * NAKSHATRA_SPAN
    }
}

/// A sidereal longitude resolved to nakshatra and pada.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 1..=4.
    pub pada: u8,
    pub degrees_in_nakshatra: f64,
}

impl NakshatraPosition {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn fraction_elapsed(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN
    }
}

pub fn nakshatra_from_longitude(sidereal_lon: f64) -> NakshatraPosition {
    let degrees_in_nakshatra = degrees_in_segment(sidereal_lon, NAKSHATRA_SPAN, 27);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraPosition {
        nakshatra: Nakshatra::from_index(segment_index(sidereal_lon, NAKSHATRA_SPAN, 27)),
        pada,
        degrees_in_nakshatra,
    }
}
