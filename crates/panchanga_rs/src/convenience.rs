use serde::Serialize;

use panchanga_ephem::{AnalyticEphemeris, GeoLocation};
use panchanga_search::{Kundli, PanchangamReport};
use panchanga_time::UtcTime;
use panchanga_vedic_base::{
    Festival, KootaScore, MangalDosha, MatchVerdict, PersonalBalam, ResolutionReason, ashtakoot,
    manglik_compatible,
};

use crate::config::Options;
use crate::engine::Panchanga;
use crate::error::PanchangaError;

/// Panchangam with the default configuration and built-in ephemeris.
pub fn compute(
    instant: &UtcTime,
    observer: &GeoLocation,
    options: &Options,
) -> Result<PanchangamReport, PanchangaError> {
    Panchanga::<AnalyticEphemeris>::default().compute(instant, observer, options)
}

/// Birth chart with the default configuration and built-in ephemeris.
pub fn compute_kundli(birth: &UtcTime, observer: &GeoLocation) -> Result<Kundli, PanchangaError> {
    Panchanga::<AnalyticEphemeris>::default().compute_kundli(birth, observer)
}

/// Ashtakoot compatibility with both charts' Mangal Dosha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub kootas: Vec<KootaScore>,
    pub total: f64,
    pub max_total: f64,
    pub verdict: MatchVerdict,
    pub boy_mangal_dosha: MangalDosha,
    pub girl_mangal_dosha: MangalDosha,
    pub manglik_compatible: bool,
}

/// Score two charts, groom first.
pub fn match_kundli(boy: &Kundli, girl: &Kundli) -> MatchResult {
    let score = ashtakoot(&boy.moon, &girl.moon);
    MatchResult {
        kootas: score.kootas,
        total: score.total,
        max_total: score.max_total,
        verdict: score.verdict,
        boy_mangal_dosha: boy.mangal_dosha,
        girl_mangal_dosha: girl.mangal_dosha,
        manglik_compatible: manglik_compatible(&boy.mangal_dosha, &girl.mangal_dosha),
    }
}

/// Tarabalam, Chandrabalam and Chandrashtama of the report's Moon for the
/// chart's native.
pub fn personal_balam(report: &PanchangamReport, chart: &Kundli) -> PersonalBalam {
    report.balam_for(&chart.moon)
}

/// Sunrise opening the report's Vedic day.
pub fn sunrise(report: &PanchangamReport) -> Result<f64, PanchangaError> {
    report
        .vedic_day
        .sunrise
        .ok_or(PanchangaError::UnavailableEvent("sunrise"))
}

pub fn sunset(report: &PanchangamReport) -> Result<f64, PanchangaError> {
    report
        .vedic_day
        .sunset
        .ok_or(PanchangaError::UnavailableEvent("sunset"))
}

/// The report's festivals, or `RuleAmbiguity` if any rule was superseded
/// by another that fired on the same day.
pub fn unambiguous_festivals(report: &PanchangamReport) -> Result<&[Festival], PanchangaError> {
    let conflicts: Vec<String> = report
        .festival_resolutions
        .iter()
        .filter_map(|r| match r.reason {
            ResolutionReason::Superseded { by } => Some(format!("{} superseded by {by}", r.rule)),
            _ => None,
        })
        .collect();
    if conflicts.is_empty() {
        Ok(&report.festivals)
    } else {
        Err(PanchangaError::RuleAmbiguity(conflicts.join(", ")))
    }
}
