//! Ashtakoot (eight-fold) marriage compatibility.
//!
//! Scoring depends only on each partner's Moon: its rashi (with degrees,
//! for the split Vashya signs) and its nakshatra pada. Mangal Dosha is
//! reported alongside but does not change the 36-point total.

mod dosha;
mod koota;
mod tables;

use serde::Serialize;

pub use dosha::{
    MANGAL_DOSHA_HOUSES, MangalDosha, MangalReference, mangal_dosha, manglik_compatible,
};
pub use koota::{
    ALL_KOOTAS, Koota, KootaScore, MoonChart, bhakoot, gana, graha_maitri, nadi, score_all, tara,
    varna, vashya, yoni,
};
pub use tables::{Gana, Nadi, Varna, Vashya, Yoni, gana_of, nadi_of, varna_of, vashya_of, yoni_of};

pub const MAX_ASHTAKOOT_SCORE: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchVerdict {
    NotRecommended,
    Average,
    Good,
    Excellent,
}

impl MatchVerdict {
    /// Below 18 is not recommended; 18..25 average; 25..33 good; 33+ excellent.
    pub fn from_total(total: f64) -> Self {
        if total < 18.0 {
            Self::NotRecommended
        } else if total < 25.0 {
            Self::Average
        } else if total < 33.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotRecommended => "Not Recommended",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakootScore {
    pub kootas: Vec<KootaScore>,
    pub total: f64,
    pub max_total: f64,
    pub verdict: MatchVerdict,
}

/// Score two Moon charts, groom first.
pub fn ashtakoot(boy: &MoonChart, girl: &MoonChart) -> AshtakootScore {
    let kootas = score_all(boy, girl);
    let total = kootas.iter().map(|k| k.score).sum();
    let max_total = kootas.iter().map(|k| k.max_score).sum();
    AshtakootScore {
        kootas,
        total,
        max_total,
        verdict: MatchVerdict::from_total(total),
    }
}
