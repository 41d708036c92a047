//! Sankranti (solar ingress) search and Punya Kalam windows.

use serde::{Deserialize, Serialize};

use panchanga_ephem::{AyanamsaModel, Body, EphemerisGateway, sidereal_longitude};
use panchanga_vedic_base::rashi::RASHI_SPAN;
use panchanga_vedic_base::{Rashi, TimeWindow, sankranti_name};

use crate::error::SearchError;
use crate::locator::{LocatorConfig, Targets, find_crossings, next_crossing, prev_crossing};

/// 1/60 of a day.
pub const GHATIKA_DAYS: f64 = 1.0 / 60.0;

/// Sun takes a little over 31 days through the slowest rashi.
const RASHI_HORIZON_DAYS: f64 = 33.0;

/// 366 days covers any single rashi's next ingress.
const YEAR_HORIZON_DAYS: f64 = 367.0;

const SOLAR_STEP_DAYS: f64 = 1.0;

/// Punya Kalam extents around the ingress instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunyaKalamConfig {
    /// Total length for ordinary sankrantis, ghatikas. Default: 16.
    pub ordinary_ghatikas: f64,
    /// Share of the ordinary window before the ingress. Default: 2/3.
    pub ordinary_before_fraction: f64,
    /// Total length for Makara and Karka, ghatikas. Default: 40.
    pub solstice_ghatikas: f64,
    /// Share of the solstice window before the ingress. Default: 0.6.
    pub solstice_before_fraction: f64,
}

impl Default for PunyaKalamConfig {
    fn default() -> Self {
        Self {
            ordinary_ghatikas: 16.0,
            ordinary_before_fraction: 2.0 / 3.0,
            solstice_ghatikas: 40.0,
            solstice_before_fraction: 0.6,
        }
    }
}

impl PunyaKalamConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        for g in [self.ordinary_ghatikas, self.solstice_ghatikas] {
            if !(g.is_finite() && g > 0.0) {
                return Err("punya kalam length must be positive");
            }
        }
        for f in [self.ordinary_before_fraction, self.solstice_before_fraction] {
            if !(0.0..=1.0).contains(&f) {
                return Err("punya kalam split must be within [0, 1]");
            }
        }
        Ok(())
    }

    /// Window around an ingress at `jd` into `rashi`.
    pub fn window_for(&self, rashi: Rashi, jd: f64) -> Option<TimeWindow> {
        let (ghatikas, before) = if is_solstice(rashi) {
            (self.solstice_ghatikas, self.solstice_before_fraction)
        } else {
            (self.ordinary_ghatikas, self.ordinary_before_fraction)
        };
        let total = ghatikas * GHATIKA_DAYS;
        TimeWindow::new(jd - total * before, jd + total * (1.0 - before))
    }
}

/// Makara and Karka sankrantis open the two ayanas.
pub const fn is_solstice(rashi: Rashi) -> bool {
    matches!(rashi, Rashi::Makara | Rashi::Karka)
}

/// The Sun entering `rashi`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankrantiEvent {
    pub rashi: Rashi,
    pub jd: f64,
    pub name: &'static str,
    pub punya_kalam: Option<TimeWindow>,
}

fn event(rashi: Rashi, jd: f64, punya: &PunyaKalamConfig) -> SankrantiEvent {
    SankrantiEvent {
        rashi,
        jd,
        name: sankranti_name(rashi),
        punya_kalam: punya.window_for(rashi, jd),
    }
}

fn rashi_at_boundary(target_deg: f64) -> Rashi {
    Rashi::from_index(((target_deg / RASHI_SPAN).round() as u32 % 12) as u8)
}

/// Parameters shared by every sankranti query.
#[derive(Debug, Clone, Copy)]
pub struct SankrantiSearch<'g, G: ?Sized> {
    pub gateway: &'g G,
    pub model: AyanamsaModel,
    pub locator: LocatorConfig,
    pub punya: PunyaKalamConfig,
}

impl<'g, G: EphemerisGateway + ?Sized> SankrantiSearch<'g, G> {
    pub fn new(gateway: &'g G, model: AyanamsaModel, locator: LocatorConfig, punya: PunyaKalamConfig) -> Self {
        Self {
            gateway,
            model,
            locator: locator.with_min_step(SOLAR_STEP_DAYS),
            punya,
        }
    }

    fn sun(&self, jd: f64) -> Result<f64, SearchError> {
        Ok(sidereal_longitude(self.gateway, Body::Sun, jd, self.model)?)
    }

    const UNIFORM: Targets<'static> = Targets::Uniform { span_deg: RASHI_SPAN };

    /// First ingress after `jd_ut`.
    pub fn next(&self, jd_ut: f64) -> Result<Option<SankrantiEvent>, SearchError> {
        let f = |t| self.sun(t);
        Ok(next_crossing(&f, jd_ut, RASHI_HORIZON_DAYS, Self::UNIFORM, &self.locator)?
            .map(|c| event(rashi_at_boundary(c.target_deg), c.jd, &self.punya)))
    }

    /// Most recent ingress at or before `jd_ut`.
    pub fn prev(&self, jd_ut: f64) -> Result<Option<SankrantiEvent>, SearchError> {
        let f = |t| self.sun(t);
        Ok(prev_crossing(&f, jd_ut, RASHI_HORIZON_DAYS, Self::UNIFORM, &self.locator)?
            .map(|c| event(rashi_at_boundary(c.target_deg), c.jd, &self.punya)))
    }

    /// Next ingress into a specific rashi.
    pub fn next_into(&self, rashi: Rashi, jd_ut: f64) -> Result<Option<SankrantiEvent>, SearchError> {
        let f = |t| self.sun(t);
        let target = [rashi.index() as f64 * RASHI_SPAN];
        Ok(next_crossing(&f, jd_ut, YEAR_HORIZON_DAYS, Targets::Explicit(&target), &self.locator)?
            .map(|c| event(rashi, c.jd, &self.punya)))
    }

    /// Most recent ingress into a specific rashi.
    pub fn prev_into(&self, rashi: Rashi, jd_ut: f64) -> Result<Option<SankrantiEvent>, SearchError> {
        let f = |t| self.sun(t);
        let target = [rashi.index() as f64 * RASHI_SPAN];
        Ok(prev_crossing(&f, jd_ut, YEAR_HORIZON_DAYS, Targets::Explicit(&target), &self.locator)?
            .map(|c| event(rashi, c.jd, &self.punya)))
    }

    /// Every ingress inside `window`, in time order.
    pub fn within(&self, window: TimeWindow) -> Result<Vec<SankrantiEvent>, SearchError> {
        let f = |t| self.sun(t);
        Ok(find_crossings(&f, window, Self::UNIFORM, &self.locator)?
            .into_iter()
            .map(|c| event(rashi_at_boundary(c.target_deg), c.jd, &self.punya))
            .collect())
    }
}
