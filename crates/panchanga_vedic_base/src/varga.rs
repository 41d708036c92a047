//! Divisional charts (vargas): each rashi split into equal parts, every
//! part mapped onto a sign.

use serde::Serialize;

use crate::rashi::{Rashi, rashi_from_longitude};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varga {
    /// Rashi chart.
    D1,
    /// Hora.
    D2,
    /// Drekkana.
    D3,
    /// Chaturthamsha.
    D4,
    /// Saptamsha.
    D7,
    /// Navamsha.
    D9,
    /// Dashamsha.
    D10,
    /// Dwadashamsha.
    D12,
}

pub const ALL_VARGAS: [Varga; 8] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
];

impl Varga {
    /// Parts per rashi.
    pub const fn division(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
        }
    }

    /// Sign a sidereal longitude falls in within this chart.
    pub fn rashi_of(self, sidereal_lon: f64) -> Rashi {
        let pos = rashi_from_longitude(sidereal_lon);
        let sign = pos.rashi;
        let span = 30.0 / f64::from(self.division());
        let part = ((pos.degrees_in_rashi / span).floor() as i32).clamp(0, i32::from(self.division()) - 1);
        // Mesha, Mithuna, ... are the odd signs.
        let odd = sign.index() % 2 == 0;
        match self {
            Self::D1 => sign,
            Self::D2 => match (odd, part) {
                (true, 0) | (false, 1) => Rashi::Simha,
                _ => Rashi::Karka,
            },
            Self::D3 => sign.offset(4 * part),
            Self::D4 => sign.offset(3 * part),
            Self::D7 if odd => sign.offset(part),
            Self::D7 => sign.offset(6 + part),
            // Navamshas run continuously from Mesha around the zodiac.
            Self::D9 => Rashi::from_index(((i32::from(sign.index()) * 9 + part) % 12) as u8),
            Self::D10 if odd => sign.offset(part),
            Self::D10 => sign.offset(8 + part),
            Self::D12 => sign.offset(part),
        }
    }
}
