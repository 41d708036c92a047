//! Yoga: 27 sectors of the sidereal Sun + Moon longitude sum.

use serde::Serialize;

use crate::util::{degrees_in_segment, segment_index};

pub const YOGA_SPAN: f64 = 360.0 / 27.0;

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// A yoga by 0-based index (0 = Vishkambha, 26 = Vaidhriti).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Yoga(u8);

impl Yoga {
    pub const fn from_index(index: u8) -> Self {
        Self(index % 27)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        YOGA_NAMES[self.0 as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    pub degrees_in_yoga: f64,
}

/// Yoga for a sidereal Sun + Moon sum in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    YogaPosition {
        yoga: Yoga::from_index(segment_index(sum_deg, YOGA_SPAN, 27)),
        degrees_in_yoga: degrees_in_segment(sum_deg, YOGA_SPAN, 27),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).yoga.name(), "Vishkambha");
        assert_eq!(yoga_from_sum(359.0).yoga.name(), "Vaidhriti");
    }

    #[test]
    fn sum_wraps() {
        assert_eq!(yoga_from_sum(365.0).yoga, yoga_from_sum(5.0).yoga);
    }
}
