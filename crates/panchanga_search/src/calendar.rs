//! Masa, ayana, ritu and samvat for an instant.
//!
//! The lunar month is always resolved amanta first (new moon to new moon,
//! named by the Sun's rashi at the closing new moon); purnimanta naming is
//! a display transform applied afterwards. Festival rules are keyed by the
//! amanta month.

use chrono::NaiveDate;
use serde::Serialize;

use panchanga_ephem::{AyanamsaModel, Body, EphemerisGateway, sidereal_longitude};
use panchanga_vedic_base::{
    Ayana, MasaConvention, MasaInfo, Paksha, Rashi, Ritu, SamvatInfo, apply_convention,
    ayana_from_sun_longitude, classify_masa, rashi_from_longitude, ritu_from_sun_rashi, samvat_for,
};

use crate::error::SearchError;
use crate::locator::LocatorConfig;
use crate::lunar_phase::{new_moon_after, new_moon_before};
use crate::sankranti::{PunyaKalamConfig, SankrantiSearch};

/// One amanta lunar month and its bounding new moons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasaSpan {
    pub info: MasaInfo,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl MasaSpan {
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Current ayana with the solstice sankrantis that open and close it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AyanaSpan {
    pub ayana: Ayana,
    pub start_jd: Option<f64>,
    pub end_jd: Option<f64>,
}

/// Calendar units in force at an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarInfo {
    /// Month under the requested convention.
    pub masa: MasaInfo,
    /// Underlying amanta month.
    pub amanta: MasaSpan,
    pub paksha: Paksha,
    pub ritu: Ritu,
    pub ayana: AyanaSpan,
    pub samvat: SamvatInfo,
}

fn sun_rashi<G: EphemerisGateway + ?Sized>(gateway: &G, jd: f64, model: AyanamsaModel) -> Result<Rashi, SearchError> {
    Ok(rashi_from_longitude(sidereal_longitude(gateway, Body::Sun, jd, model)?).rashi)
}

/// Amanta month containing `jd_ut`; `None` if either new moon is not found.
pub fn masa_at<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    model: AyanamsaModel,
    config: &LocatorConfig,
) -> Result<Option<MasaSpan>, SearchError> {
    let Some(start_jd) = new_moon_before(gateway, jd_ut, config)? else {
        return Ok(None);
    };
    let Some(end_jd) = new_moon_after(gateway, jd_ut, config)? else {
        return Ok(None);
    };
    let info = classify_masa(sun_rashi(gateway, start_jd, model)?, sun_rashi(gateway, end_jd, model)?);
    Ok(Some(MasaSpan { info, start_jd, end_jd }))
}

/// Resolves months for a run of nearby instants, reusing the last month
/// while it still contains the query.
pub struct MasaResolver<'g, G: ?Sized> {
    gateway: &'g G,
    model: AyanamsaModel,
    config: LocatorConfig,
    last: Option<MasaSpan>,
}

impl<'g, G: EphemerisGateway + ?Sized> MasaResolver<'g, G> {
    pub fn new(gateway: &'g G, model: AyanamsaModel, config: LocatorConfig) -> Self {
        Self {
            gateway,
            model,
            config,
            last: None,
        }
    }

    pub fn at(&mut self, jd_ut: f64) -> Result<Option<MasaSpan>, SearchError> {
        if let Some(span) = self.last.filter(|s| s.contains(jd_ut)) {
            return Ok(Some(span));
        }
        let span = masa_at(self.gateway, jd_ut, self.model, &self.config)?;
        if span.is_some() {
            self.last = span;
        }
        Ok(span)
    }
}

/// Ayana at `jd_ut` bounded by its solstice sankrantis.
pub fn ayana_at<G: EphemerisGateway + ?Sized>(
    search: &SankrantiSearch<'_, G>,
    jd_ut: f64,
) -> Result<AyanaSpan, SearchError> {
    let sun = sidereal_longitude(search.gateway, Body::Sun, jd_ut, search.model)?;
    let ayana = ayana_from_sun_longitude(sun);
    let closing = match ayana {
        Ayana::Uttarayana => Ayana::Dakshinayana,
        Ayana::Dakshinayana => Ayana::Uttarayana,
    };
    let start = search.prev_into(ayana.opening_rashi(), jd_ut)?;
    let end = search.next_into(closing.opening_rashi(), jd_ut)?;
    Ok(AyanaSpan {
        ayana,
        start_jd: start.map(|e| e.jd),
        end_jd: end.map(|e| e.jd),
    })
}

/// Full calendar context for an instant on civil `date`.
#[allow(clippy::too_many_arguments)]
pub fn calendar_at<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    date: NaiveDate,
    paksha: Paksha,
    model: AyanamsaModel,
    convention: MasaConvention,
    locator: &LocatorConfig,
    punya: &PunyaKalamConfig,
) -> Result<Option<CalendarInfo>, SearchError> {
    let Some(amanta) = masa_at(gateway, jd_ut, model, locator)? else {
        return Ok(None);
    };
    let search = SankrantiSearch::new(gateway, model, *locator, *punya);
    Ok(Some(CalendarInfo {
        masa: apply_convention(amanta.info, paksha, convention),
        amanta,
        paksha,
        ritu: ritu_from_sun_rashi(sun_rashi(gateway, jd_ut, model)?),
        ayana: ayana_at(&search, jd_ut)?,
        samvat: samvat_for(date, amanta.info.masa),
    }))
}
