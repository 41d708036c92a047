//! Panchak: the Moon's passage through Dhanishta..Revati.

use serde::Serialize;

use crate::nakshatra::Nakshatra;
use crate::vaar::Vaar;

/// Named by the weekday on which the Panchak begins or is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanchakKind {
    Roga,
    Raja,
    Agni,
    Chora,
    Mrityu,
}

impl PanchakKind {
    /// Weekday classification. Wednesday and Thursday Panchak carry no
    /// named dosha.
    pub const fn for_vaar(vaar: Vaar) -> Option<Self> {
        match vaar {
            Vaar::Ravivaar => Some(Self::Roga),
            Vaar::Somvaar => Some(Self::Raja),
            Vaar::Mangalvaar => Some(Self::Agni),
            Vaar::Budhvaar | Vaar::Guruvaar => None,
            Vaar::Shukravaar => Some(Self::Chora),
            Vaar::Shanivaar => Some(Self::Mrityu),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Roga => "Roga Panchak",
            Self::Raja => "Raja Panchak",
            Self::Agni => "Agni Panchak",
            Self::Chora => "Chora Panchak",
            Self::Mrityu => "Mrityu Panchak",
        }
    }

    pub const fn avoid(self) -> &'static str {
        match self {
            Self::Roga => "starting medical treatment",
            Self::Raja => "government and legal dealings",
            Self::Agni => "fire work and construction",
            Self::Chora => "travel and valuable transactions",
            Self::Mrityu => "strenuous or risky work",
        }
    }
}

pub const PANCHAK_NAKSHATRAS: [Nakshatra; 5] = [
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

pub const fn is_panchak_nakshatra(nakshatra: Nakshatra) -> bool {
    nakshatra.index() >= Nakshatra::Dhanishta.index()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanchakStatus {
    pub active: bool,
    pub nakshatra: Nakshatra,
    pub kind: Option<PanchakKind>,
}

pub fn panchak_status(nakshatra: Nakshatra, vaar: Vaar) -> PanchakStatus {
    let active = is_panchak_nakshatra(nakshatra);
    PanchakStatus {
        active,
        nakshatra,
        kind: if active { PanchakKind::for_vaar(vaar) } else { None },
    }
}
