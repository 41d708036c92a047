//! Era years (Shaka, Vikram) and the 60-year Samvatsara cycle.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::masa::Masa;

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava", "Vibhava", "Shukla", "Pramoda", "Prajapati", "Angira", "Srimukha", "Bhava",
    "Yuva", "Dhatru", "Ishvara", "Bahudhanya", "Pramathi", "Vikrama", "Vrusha", "Chitrabhanu",
    "Subhanu", "Tarana", "Parthiva", "Vyaya", "Sarvajit", "Sarvadhari", "Virodhi", "Vikriti",
    "Khara", "Nandana", "Vijaya", "Jaya", "Manmatha", "Durmukha", "Hemalamba", "Vilambi",
    "Vikari", "Sharvari", "Plava", "Shubhakrit", "Shobhakrit", "Krodhi", "Vishvavasu",
    "Parabhava", "Plavanga", "Kilaka", "Saumya", "Sadharana", "Virodhikrit", "Paridhavi",
    "Pramadicha", "Ananda", "Rakshasa", "Nala", "Pingala", "Kalayukti", "Siddharthi", "Raudra",
    "Durmati", "Dundubhi", "Rudhirodgari", "Raktakshi", "Krodhana", "Akshaya",
];

/// Offset from the Gregorian year to the Shaka year.
pub const SHAKA_EPOCH_OFFSET: i32 = 78;
/// Offset from the Shaka year to the Vikram year.
pub const VIKRAM_FROM_SHAKA: i32 = 135;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Samvatsara(u8);

impl Samvatsara {
    pub const fn from_index(index: u8) -> Self {
        Self(index % 60)
    }

    /// 0 = Prabhava.
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self.0 as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamvatInfo {
    pub shaka: i32,
    pub vikram: i32,
    pub samvatsara: Samvatsara,
}

/// Era years for a civil date in `masa`.
///
/// The era year turns at Chaitra. Dates early in the Gregorian year that
/// still fall in Pausha, Magha or Phalguna belong to the previous era year.
pub fn samvat_for(date: NaiveDate, masa: Masa) -> SamvatInfo {
    let mut shaka = date.year() - SHAKA_EPOCH_OFFSET;
    if masa.index() >= Masa::Pausha.index() && date.month() <= 6 {
        shaka -= 1;
    }
    SamvatInfo {
        shaka,
        vikram: shaka + VIKRAM_FROM_SHAKA,
        samvatsara: Samvatsara::from_index((shaka + 11).rem_euclid(60) as u8),
    }
}
