//! Masa (lunar month) naming, Adhika/Kshaya classification and the
//! amanta/purnimanta conventions.
//!
//! A lunar month runs from one new moon to the next. It takes the name of
//! the rashi the Sun occupies at the closing new moon: Sun in Mesha closes
//! Chaitra, Sun in Vrishabha closes Vaishakha, and so on. A month in which
//! the Sun changes no rashi is Adhika and borrows the name of the month
//! that follows it. A month in which the Sun changes two rashis is Kshaya
//! and merges two names.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;
use crate::tithi::Paksha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Chaitra = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwina => "Ashwina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }
}

/// Masa closed by a new moon with the Sun in `rashi`.
pub const fn masa_from_rashi(rashi: Rashi) -> Masa {
    Masa::from_index(rashi.index())
}

/// Which new moon or full moon starts the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasaConvention {
    /// Month ends at new moon (South and West India).
    #[default]
    Amanta,
    /// Month ends at full moon (North India); Krishna paksha belongs to
    /// the following amanta month's name.
    Purnimanta,
}

/// Classification of one new-moon-to-new-moon month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MasaInfo {
    pub masa: Masa,
    pub adhika: bool,
    /// Name absorbed into this month when the month is Kshaya.
    pub kshaya_merged_with: Option<Masa>,
    pub convention: MasaConvention,
}

/// Classify an amanta month from the Sun's rashi at its opening and closing
/// new moons.
pub fn classify_masa(rashi_at_start: Rashi, rashi_at_end: Rashi) -> MasaInfo {
    let advance = (i32::from(rashi_at_end.index()) - i32::from(rashi_at_start.index())).rem_euclid(12);
    let (masa, adhika, kshaya_merged_with) = match advance {
        0 => (masa_from_rashi(rashi_at_end).next(), true, None),
        1 => (masa_from_rashi(rashi_at_end), false, None),
        _ => {
            let merged = masa_from_rashi(rashi_at_end);
            (masa_from_rashi(rashi_at_end.offset(-1)), false, Some(merged))
        }
    };
    MasaInfo {
        masa,
        adhika,
        kshaya_merged_with,
        convention: MasaConvention::Amanta,
    }
}

/// Re-express an amanta month under `convention` for a day in `paksha`.
pub fn apply_convention(info: MasaInfo, paksha: Paksha, convention: MasaConvention) -> MasaInfo {
    match (convention, paksha) {
        (MasaConvention::Purnimanta, Paksha::Krishna) => MasaInfo {
            masa: info.masa.next(),
            kshaya_merged_with: info.kshaya_merged_with.map(Masa::next),
            convention,
            ..info
        },
        _ => MasaInfo { convention, ..info },
    }
}
