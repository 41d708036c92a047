//! Karana: half-tithi units, 60 per synodic month, 11 names.
//!
//! Position 0 is always Kimstughna and positions 57..=59 are Shakuni,
//! Chatushpada and Naga. The 56 positions between cycle through the seven
//! movable karanas starting from Bava.

use serde::Serialize;

use crate::util::{degrees_in_segment, segment_index};

pub const KARANA_SPAN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Karana at a 0-based position in the month (wraps modulo 60).
    pub const fn from_sequence_index(index: u8) -> Self {
        match index % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            i => MOVABLE[((i - 1) % 7) as usize],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Vishti (Bhadra) is avoided for auspicious work.
    pub const fn is_vishti(self) -> bool {
        matches!(self, Self::Vishti)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0..=59 within the synodic month.
    pub sequence_index: u8,
    pub degrees_in_karana: f64,
}

pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let sequence_index = segment_index(elongation_deg, KARANA_SPAN, 60);
    KaranaPosition {
        karana: Karana::from_sequence_index(sequence_index),
        sequence_index,
        degrees_in_karana: degrees_in_segment(elongation_deg, KARANA_SPAN, 60),
    }
}
