//! Constant attribute tables for the eight kootas.

use serde::Serialize;

use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

/// Cancer, Scorpio and Pisces are Brahmin; each element triad descends
/// from there.
pub const fn varna_of(rashi: Rashi) -> Varna {
    match rashi.index() % 4 {
        0 => Varna::Kshatriya,
        1 => Varna::Vaishya,
        2 => Varna::Shudra,
        _ => Varna::Brahmin,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vashya {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

/// Dhanu and Makara change class at 15°.
pub fn vashya_of(rashi: Rashi, degrees_in_rashi: f64) -> Vashya {
    let first_half = degrees_in_rashi < 15.0;
    match rashi {
        Rashi::Mesha | Rashi::Vrishabha => Vashya::Chatushpada,
        Rashi::Mithuna | Rashi::Kanya | Rashi::Tula | Rashi::Kumbha => Vashya::Manava,
        Rashi::Karka | Rashi::Meena => Vashya::Jalachara,
        Rashi::Simha => Vashya::Vanachara,
        Rashi::Vrischika => Vashya::Keeta,
        Rashi::Dhanu if first_half => Vashya::Manava,
        Rashi::Dhanu => Vashya::Chatushpada,
        Rashi::Makara if first_half => Vashya::Chatushpada,
        Rashi::Makara => Vashya::Jalachara,
    }
}

/// `[boy][girl]`, half points allowed.
pub const VASHYA_SCORE: [[f64; 5]; 5] = [
    [2.0, 1.0, 1.0, 0.5, 1.0],
    [1.0, 2.0, 0.5, 0.0, 1.0],
    [1.0, 0.5, 2.0, 1.0, 1.0],
    [0.5, 0.0, 1.0, 2.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 2.0],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Snake,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

const NAKSHATRA_YONI: [Yoni; 27] = {
    use Yoni::*;
    [
        Horse, Elephant, Sheep, Snake, Snake, Dog, Cat, Sheep, Cat, Rat, Rat, Cow, Buffalo, Tiger,
        Buffalo, Tiger, Deer, Deer, Dog, Monkey, Mongoose, Monkey, Lion, Horse, Lion, Cow,
        Elephant,
    ]
};

pub const fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    NAKSHATRA_YONI[nakshatra.index() as usize]
}

/// Symmetric, indexed by `Yoni as usize`. Sworn enemies score 0.
pub const YONI_SCORE: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1],
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1],
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

const NAKSHATRA_GANA: [Gana; 27] = {
    use Gana::*;
    [
        Deva, Manushya, Rakshasa, Manushya, Deva, Manushya, Deva, Deva, Rakshasa, Rakshasa,
        Manushya, Manushya, Deva, Rakshasa, Deva, Rakshasa, Deva, Rakshasa, Rakshasa, Manushya,
        Manushya, Deva, Rakshasa, Rakshasa, Manushya, Manushya, Deva,
    ]
};

pub const fn gana_of(nakshatra: Nakshatra) -> Gana {
    NAKSHATRA_GANA[nakshatra.index() as usize]
}

/// `[boy][girl]`. A Manushya groom with a Deva bride loses one point.
pub const GANA_SCORE: [[u8; 3]; 3] = [[6, 6, 0], [5, 6, 0], [0, 0, 6]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Runs Adi, Madhya, Antya, Antya, Madhya, Adi and repeats.
pub const fn nadi_of(nakshatra: Nakshatra) -> Nadi {
    match nakshatra.index() % 6 {
        0 | 5 => Nadi::Adi,
        1 | 4 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;

    #[test]
    fn yoni_matrix_is_symmetric_with_full_diagonal() {
        for i in 0..14 {
            assert_eq!(YONI_SCORE[i][i], 4);
            for j in 0..14 {
                assert_eq!(YONI_SCORE[i][j], YONI_SCORE[j][i], "{i},{j}");
            }
        }
    }

    #[test]
    fn each_yoni_has_one_sworn_enemy() {
        for row in YONI_SCORE {
            assert_eq!(row.iter().filter(|&&s| s == 0).count(), 1);
        }
    }

    #[test]
    fn nine_nakshatras_per_gana_and_nadi() {
        for g in [Gana::Deva, Gana::Manushya, Gana::Rakshasa] {
            assert_eq!(ALL_NAKSHATRAS.iter().filter(|&&n| gana_of(n) == g).count(), 9);
        }
        for d in [Nadi::Adi, Nadi::Madhya, Nadi::Antya] {
            assert_eq!(ALL_NAKSHATRAS.iter().filter(|&&n| nadi_of(n) == d).count(), 9);
        }
    }

    #[test]
    fn varna_by_element() {
        assert_eq!(varna_of(Rashi::Karka), Varna::Brahmin);
        assert_eq!(varna_of(Rashi::Meena), Varna::Brahmin);
        assert_eq!(varna_of(Rashi::Simha), Varna::Kshatriya);
        assert_eq!(varna_of(Rashi::Makara), Varna::Vaishya);
        assert_eq!(varna_of(Rashi::Kumbha), Varna::Shudra);
    }

    #[test]
    fn split_signs() {
        assert_eq!(vashya_of(Rashi::Dhanu, 10.0), Vashya::Manava);
        assert_eq!(vashya_of(Rashi::Dhanu, 20.0), Vashya::Chatushpada);
        assert_eq!(vashya_of(Rashi::Makara, 10.0), Vashya::Chatushpada);
        assert_eq!(vashya_of(Rashi::Makara, 20.0), Vashya::Jalachara);
    }

    #[test]
    fn yoni_spot_checks() {
        assert_eq!(yoni_of(Nakshatra::Ashwini), Yoni::Horse);
        assert_eq!(yoni_of(Nakshatra::Shatabhisha), Yoni::Horse);
        assert_eq!(yoni_of(Nakshatra::UttaraAshadha), Yoni::Mongoose);
        assert_eq!(yoni_of(Nakshatra::Revati), Yoni::Elephant);
    }
}
