//! Personal strength of a day against a birth chart: Tarabalam from the
//! birth nakshatra, Chandrabalam and Chandrashtama from the birth rashi.

use serde::Serialize;

use crate::nakshatra::{ALL_NAKSHATRAS, Nakshatra};
use crate::rashi::Rashi;

/// The nine taras, counted from the birth nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tara {
    Janma,
    Sampat,
    Vipat,
    Kshema,
    Pratyak,
    Sadhana,
    Naidhana,
    Mitra,
    ParamaMitra,
}

const ALL_TARAS: [Tara; 9] = [
    Tara::Janma,
    Tara::Sampat,
    Tara::Vipat,
    Tara::Kshema,
    Tara::Pratyak,
    Tara::Sadhana,
    Tara::Naidhana,
    Tara::Mitra,
    Tara::ParamaMitra,
];

impl Tara {
    /// 1..=9.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Janma => "Janma",
            Self::Sampat => "Sampat",
            Self::Vipat => "Vipat",
            Self::Kshema => "Kshema",
            Self::Pratyak => "Pratyak",
            Self::Sadhana => "Sadhana",
            Self::Naidhana => "Naidhana",
            Self::Mitra => "Mitra",
            Self::ParamaMitra => "Parama Mitra",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Janma => "Birth star; may cause physical discomfort",
            Self::Sampat => "Wealth star; good for financial matters",
            Self::Vipat => "Danger star; obstacles and troubles possible",
            Self::Kshema => "Well-being star; prosperity and good health",
            Self::Pratyak => "Opposition star; hindrances and delays",
            Self::Sadhana => "Achievement star; success in endeavours",
            Self::Naidhana => "Death star; avoid important activities",
            Self::Mitra => "Friend star; support and cooperation",
            Self::ParamaMitra => "Great friend star; highly favourable",
        }
    }

    /// Sampat, Kshema, Sadhana, Mitra and Parama Mitra.
    pub const fn is_auspicious(self) -> bool {
        matches!(
            self,
            Self::Sampat | Self::Kshema | Self::Sadhana | Self::Mitra | Self::ParamaMitra
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tarabalam {
    pub birth: Nakshatra,
    pub current: Nakshatra,
    pub tara: Tara,
    pub auspicious: bool,
}

/// Tara of `current` counted inclusively from `birth`.
pub fn tarabalam(birth: Nakshatra, current: Nakshatra) -> Tarabalam {
    let count = (i32::from(current.index()) - i32::from(birth.index())).rem_euclid(27);
    let tara = ALL_TARAS[(count % 9) as usize];
    Tarabalam {
        birth,
        current,
        tara,
        auspicious: tara.is_auspicious(),
    }
}

/// Nakshatras whose tara from `birth` is auspicious, in zodiac order.
pub fn auspicious_nakshatras(birth: Nakshatra) -> Vec<Nakshatra> {
    ALL_NAKSHATRAS
        .into_iter()
        .filter(|&n| tarabalam(birth, n).auspicious)
        .collect()
}

/// Moon positions from the birth rashi that give Chandrabalam.
const CHANDRABALAM_GOOD: [u8; 6] = [1, 3, 6, 7, 10, 11];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chandrabalam {
    pub birth: Rashi,
    pub moon: Rashi,
    /// 1..=12, counted inclusively from the birth rashi.
    pub position: u8,
    pub favourable: bool,
}

pub fn chandrabalam(birth: Rashi, moon: Rashi) -> Chandrabalam {
    let position = birth.house_from(moon);
    Chandrabalam {
        birth,
        moon,
        position,
        favourable: CHANDRABALAM_GOOD.contains(&position),
    }
}

/// Eighth rashi from the birth rashi.
pub const fn chandrashtama_rashi(birth: Rashi) -> Rashi {
    birth.offset(7)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chandrashtama {
    pub birth: Rashi,
    pub rashi: Rashi,
    pub moon: Rashi,
    pub active: bool,
}

pub fn chandrashtama(birth: Rashi, moon: Rashi) -> Chandrashtama {
    let rashi = chandrashtama_rashi(birth);
    Chandrashtama {
        birth,
        rashi,
        moon,
        active: moon == rashi,
    }
}

/// The three readings for one birth chart against the current Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalBalam {
    pub tarabalam: Tarabalam,
    pub chandrabalam: Chandrabalam,
    pub chandrashtama: Chandrashtama,
}

pub fn personal_balam(
    birth_nakshatra: Nakshatra,
    birth_rashi: Rashi,
    moon_nakshatra: Nakshatra,
    moon_rashi: Rashi,
) -> PersonalBalam {
    PersonalBalam {
        tarabalam: tarabalam(birth_nakshatra, moon_nakshatra),
        chandrabalam: chandrabalam(birth_rashi, moon_rashi),
        chandrashtama: chandrashtama(birth_rashi, moon_rashi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;
    use proptest::prelude::*;

    #[test]
    fn janma_and_sampat() {
        let t = tarabalam(Nakshatra::Ashwini, Nakshatra::Ashwini);
        assert_eq!(t.tara, Tara::Janma);
        assert!(!t.auspicious);
        let t = tarabalam(Nakshatra::Ashwini, Nakshatra::Bharani);
        assert_eq!(t.tara, Tara::Sampat);
        assert!(t.auspicious);
    }

    #[test]
    fn count_wraps_past_revati() {
        // Revati -> Ashwini is the second star.
        assert_eq!(tarabalam(Nakshatra::Revati, Nakshatra::Ashwini).tara, Tara::Sampat);
        // Ninth from Rohini is Uttara Phalguni.
        assert_eq!(tarabalam(Nakshatra::Rohini, Nakshatra::UttaraPhalguni).tara, Tara::ParamaMitra);
    }

    #[test]
    fn fifteen_auspicious_stars() {
        let good = auspicious_nakshatras(Nakshatra::Magha);
        assert_eq!(good.len(), 15);
        assert!(!good.contains(&Nakshatra::Magha));
    }

    #[test]
    fn chandrabalam_positions() {
        let same = chandrabalam(Rashi::Mesha, Rashi::Mesha);
        assert_eq!(same.position, 1);
        assert!(same.favourable);
        let second = chandrabalam(Rashi::Mesha, Rashi::Vrishabha);
        assert_eq!(second.position, 2);
        assert!(!second.favourable);
        assert_eq!(chandrabalam(Rashi::Meena, Rashi::Makara).position, 11);
    }

    #[test]
    fn chandrashtama_is_eighth() {
        assert_eq!(chandrashtama_rashi(Rashi::Mesha), Rashi::Vrischika);
        assert_eq!(chandrashtama_rashi(Rashi::Simha), Rashi::Meena);
        assert!(chandrashtama(Rashi::Mesha, Rashi::Vrischika).active);
        assert!(!chandrashtama(Rashi::Mesha, Rashi::Tula).active);
    }

    proptest! {
        #[test]
        fn chandrashtama_never_has_chandrabalam(b in 0u8..12, m in 0u8..12) {
            let (birth, moon) = (ALL_RASHIS[b as usize], ALL_RASHIS[m as usize]);
            let p = personal_balam(Nakshatra::Ashwini, birth, Nakshatra::Ashwini, moon);
            prop_assert_eq!(p.chandrabalam.position == 8, p.chandrashtama.active);
            if p.chandrashtama.active {
                prop_assert!(!p.chandrabalam.favourable);
            }
        }
    }
}
