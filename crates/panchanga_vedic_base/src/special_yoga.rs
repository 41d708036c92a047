//! Weekday + nakshatra combinations (Amrit Siddhi, Sarvartha Siddhi,
//! Ravi Pushya, Guru Pushya).

use serde::Serialize;

use crate::nakshatra::Nakshatra;
use crate::vaar::Vaar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialYoga {
    AmritSiddhi,
    SarvarthaSiddhi,
    RaviPushya,
    GuruPushya,
}

impl SpecialYoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AmritSiddhi => "Amrit Siddhi Yoga",
            Self::SarvarthaSiddhi => "Sarvartha Siddhi Yoga",
            Self::RaviPushya => "Ravi Pushya Yoga",
            Self::GuruPushya => "Guru Pushya Yoga",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::AmritSiddhi => "Auspicious for most undertakings",
            Self::SarvarthaSiddhi => "Success in all endeavours",
            Self::RaviPushya => "Starting ventures, buying gold and assets",
            Self::GuruPushya => "Learning, spiritual practice and investment",
        }
    }
}

use Nakshatra as N;

/// Amrit Siddhi nakshatra per weekday, Sunday first.
const AMRIT_SIDDHI: [Nakshatra; 7] = [
    N::Hasta,
    N::Mrigashira,
    N::Ashwini,
    N::Anuradha,
    N::Pushya,
    N::Revati,
    N::Rohini,
];

const SARVARTHA_SIDDHI: [&[Nakshatra]; 7] = [
    &[
        N::Ashwini,
        N::Pushya,
        N::UttaraPhalguni,
        N::Hasta,
        N::Mula,
        N::UttaraAshadha,
        N::UttaraBhadrapada,
    ],
    &[N::Rohini, N::Mrigashira, N::Pushya, N::Anuradha, N::Shravana],
    &[N::Ashwini, N::Krittika, N::Ashlesha, N::UttaraAshadha],
    &[N::Krittika, N::Rohini, N::Mrigashira, N::Hasta, N::Anuradha],
    &[N::Ashwini, N::Punarvasu, N::Pushya, N::Anuradha, N::Revati],
    &[N::Ashwini, N::Anuradha, N::Revati],
    &[N::Rohini, N::Swati],
];

/// Yogas formed by `vaar` with the nakshatra prevailing at sunrise.
pub fn special_yogas(vaar: Vaar, nakshatra: Nakshatra) -> Vec<SpecialYoga> {
    let day = usize::from(vaar.index());
    let mut out = Vec::new();
    if AMRIT_SIDDHI[day] == nakshatra {
        out.push(SpecialYoga::AmritSiddhi);
    }
    if SARVARTHA_SIDDHI[day].contains(&nakshatra) {
        out.push(SpecialYoga::SarvarthaSiddhi);
    }
    match (vaar, nakshatra) {
        (Vaar::Ravivaar, N::Pushya) => out.push(SpecialYoga::RaviPushya),
        (Vaar::Guruvaar, N::Pushya) => out.push(SpecialYoga::GuruPushya),
        _ => {}
    }
    out
}
