//! The eight koota scorers. Every scorer takes the groom first.

use serde::Serialize;

use super::tables::{
    GANA_SCORE, VASHYA_SCORE, YONI_SCORE, gana_of, nadi_of, varna_of, vashya_of, yoni_of,
};
use crate::graha::{Maitri, naisargika_maitri};
use crate::nakshatra::{Nakshatra, NakshatraPosition, nakshatra_from_longitude};
use crate::rashi::{Rashi, RashiPosition, rashi_from_longitude};

/// Moon placement of one partner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonChart {
    pub rashi: RashiPosition,
    pub nakshatra: NakshatraPosition,
}

impl MoonChart {
    pub fn from_longitude(moon_sidereal_lon: f64) -> Self {
        Self {
            rashi: rashi_from_longitude(moon_sidereal_lon),
            nakshatra: nakshatra_from_longitude(moon_sidereal_lon),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points; the eight sum to 36.
    pub const fn max_score(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::GrahaMaitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }

    pub const fn area(self) -> &'static str {
        match self {
            Self::Varna => "Work and ego",
            Self::Vashya => "Mutual control",
            Self::Tara => "Destiny",
            Self::Yoni => "Physical compatibility",
            Self::GrahaMaitri => "Mental compatibility",
            Self::Gana => "Temperament",
            Self::Bhakoot => "Love and prosperity",
            Self::Nadi => "Health and progeny",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KootaScore {
    pub koota: Koota,
    pub name: &'static str,
    pub score: f64,
    pub max_score: f64,
    pub area: &'static str,
    pub description: String,
}

impl KootaScore {
    fn new(koota: Koota, score: f64, description: String) -> Self {
        Self {
            koota,
            name: koota.name(),
            score,
            max_score: koota.max_score(),
            area: koota.area(),
            description,
        }
    }
}

pub fn varna(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (b, g) = (varna_of(boy.rashi.rashi), varna_of(girl.rashi.rashi));
    let score = if b >= g { 1.0 } else { 0.0 };
    KootaScore::new(Koota::Varna, score, format!("{b:?} / {g:?}"))
}

pub fn vashya(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let b = vashya_of(boy.rashi.rashi, boy.rashi.degrees_in_rashi);
    let g = vashya_of(girl.rashi.rashi, girl.rashi.degrees_in_rashi);
    let score = VASHYA_SCORE[b as usize][g as usize];
    KootaScore::new(Koota::Vashya, score, format!("{b:?} / {g:?}"))
}

/// Count from `from` to `to` inclusive, reduced mod 9. Vipat (3),
/// Pratyak (5) and Naidhana (7) are the bad taras.
fn tara_is_good(from: Nakshatra, to: Nakshatra) -> bool {
    let count = (i32::from(to.index()) - i32::from(from.index())).rem_euclid(27) + 1;
    !matches!(count % 9, 3 | 5 | 7)
}

pub fn tara(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (b, g) = (boy.nakshatra.nakshatra, girl.nakshatra.nakshatra);
    let girl_to_boy = tara_is_good(g, b);
    let boy_to_girl = tara_is_good(b, g);
    let score = match (girl_to_boy, boy_to_girl) {
        (true, true) => 3.0,
        (false, false) => 0.0,
        _ => 1.5,
    };
    KootaScore::new(
        Koota::Tara,
        score,
        format!("girl to boy good: {girl_to_boy}, boy to girl good: {boy_to_girl}"),
    )
}

pub fn yoni(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (b, g) = (yoni_of(boy.nakshatra.nakshatra), yoni_of(girl.nakshatra.nakshatra));
    let score = f64::from(YONI_SCORE[b as usize][g as usize]);
    KootaScore::new(Koota::Yoni, score, format!("{b:?} / {g:?}"))
}

pub fn graha_maitri(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (bl, gl) = (boy.rashi.rashi.lord(), girl.rashi.rashi.lord());
    let score = match (naisargika_maitri(bl, gl), naisargika_maitri(gl, bl)) {
        (Maitri::Friend, Maitri::Friend) => 5.0,
        (Maitri::Friend, Maitri::Neutral) | (Maitri::Neutral, Maitri::Friend) => 4.0,
        (Maitri::Neutral, Maitri::Neutral) => 3.0,
        (Maitri::Friend, Maitri::Enemy) | (Maitri::Enemy, Maitri::Friend) => 1.0,
        (Maitri::Neutral, Maitri::Enemy) | (Maitri::Enemy, Maitri::Neutral) => 0.5,
        (Maitri::Enemy, Maitri::Enemy) => 0.0,
    };
    KootaScore::new(
        Koota::GrahaMaitri,
        score,
        format!("{} / {}", bl.english_name(), gl.english_name()),
    )
}

pub fn gana(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (b, g) = (gana_of(boy.nakshatra.nakshatra), gana_of(girl.nakshatra.nakshatra));
    let score = f64::from(GANA_SCORE[b as usize][g as usize]);
    KootaScore::new(Koota::Gana, score, format!("{b:?} / {g:?}"))
}

/// Dwirdwadasha (2/12), Navapanchama (5/9) and Shadashtaka (6/8) score
/// nothing unless both signs share a lord.
pub fn bhakoot(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (b, g): (Rashi, Rashi) = (boy.rashi.rashi, girl.rashi.rashi);
    let position = b.house_from(g);
    let afflicted = matches!(position, 2 | 12 | 5 | 9 | 6 | 8);
    let same_lord = b.lord() == g.lord();
    let (score, note) = match (afflicted, same_lord) {
        (false, _) => (7.0, ""),
        (true, true) => (7.0, ", cancelled by common lord"),
        (true, false) => (0.0, ", bhakoot dosha"),
    };
    KootaScore::new(
        Koota::Bhakoot,
        score,
        format!("girl in house {position} from boy{note}"),
    )
}

pub fn nadi(boy: &MoonChart, girl: &MoonChart) -> KootaScore {
    let (bn, gn) = (boy.nakshatra, girl.nakshatra);
    let (b, g) = (nadi_of(bn.nakshatra), nadi_of(gn.nakshatra));
    let exception = bn.nakshatra == gn.nakshatra && bn.pada != gn.pada;
    let (score, note) = match (b == g, exception) {
        (false, _) => (8.0, ""),
        (true, true) => (8.0, ", same nakshatra in different padas"),
        (true, false) => (0.0, ", nadi dosha"),
    };
    KootaScore::new(Koota::Nadi, score, format!("{b:?} / {g:?}{note}"))
}

/// All eight scores in canonical order.
pub fn score_all(boy: &MoonChart, girl: &MoonChart) -> Vec<KootaScore> {
    vec![
        varna(boy, girl),
        vashya(boy, girl),
        tara(boy, girl),
        yoni(boy, girl),
        graha_maitri(boy, girl),
        gana(boy, girl),
        bhakoot(boy, girl),
        nadi(boy, girl),
    ]
}
