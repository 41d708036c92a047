//! Planetary dignity by sign: exaltation, debilitation and own sign.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    Neutral,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::OwnSign => "Own Sign",
            Self::Neutral => "Neutral",
        }
    }
}

pub const fn exaltation_rashi(graha: Graha) -> Rashi {
    match graha {
        Graha::Surya => Rashi::Mesha,
        Graha::Chandra => Rashi::Vrishabha,
        Graha::Mangal => Rashi::Makara,
        Graha::Buddh => Rashi::Kanya,
        Graha::Guru => Rashi::Karka,
        Graha::Shukra => Rashi::Meena,
        Graha::Shani => Rashi::Tula,
        Graha::Rahu => Rashi::Vrishabha,
        Graha::Ketu => Rashi::Vrischika,
    }
}

/// Always the sign opposite exaltation.
pub const fn debilitation_rashi(graha: Graha) -> Rashi {
    exaltation_rashi(graha).offset(6)
}

/// Signs owned by the graha. Nodes own none.
pub const fn own_rashis(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Exaltation outranks own sign (Mercury in Kanya is exalted).
pub fn dignity_in(graha: Graha, rashi: Rashi) -> Dignity {
    if exaltation_rashi(graha) == rashi {
        Dignity::Exalted
    } else if debilitation_rashi(graha) == rashi {
        Dignity::Debilitated
    } else if own_rashis(graha).contains(&rashi) {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_dignities() {
        assert_eq!(dignity_in(Graha::Surya, Rashi::Mesha), Dignity::Exalted);
        assert_eq!(dignity_in(Graha::Surya, Rashi::Tula), Dignity::Debilitated);
        assert_eq!(dignity_in(Graha::Shani, Rashi::Kumbha), Dignity::OwnSign);
        assert_eq!(dignity_in(Graha::Buddh, Rashi::Kanya), Dignity::Exalted);
        assert_eq!(dignity_in(Graha::Guru, Rashi::Simha), Dignity::Neutral);
    }

    #[test]
    fn node_debilitation_is_opposite() {
        assert_eq!(debilitation_rashi(Graha::Rahu), Rashi::Vrischika);
        assert_eq!(debilitation_rashi(Graha::Ketu), Rashi::Vrishabha);
    }

    #[test]
    fn every_rashi_has_one_lord_owning_it() {
        for r in crate::rashi::ALL_RASHIS {
            assert!(own_rashis(r.lord()).contains(&r), "{r:?}");
        }
    }
}
