//! Vaar (weekday), reckoned from sunrise to sunrise.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::graha::Graha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_index(date.weekday().num_days_from_sunday() as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Ruling graha of the day.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_known_dates() {
        let d = NaiveDate::from_ymd_opt(2026, 6, 16).unwrap();
        assert_eq!(Vaar::from_date(d), Vaar::Mangalvaar);
        let d = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        assert_eq!(Vaar::from_date(d), Vaar::Ravivaar);
    }

    #[test]
    fn lords_follow_the_week() {
        assert_eq!(Vaar::Shanivaar.lord(), Graha::Shani);
        assert_eq!(Vaar::Guruvaar.lord(), Graha::Guru);
    }
}
