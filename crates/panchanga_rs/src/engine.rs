//! A configured engine: gateway, settings and festival rules in one handle.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use panchanga_ephem::{AnalyticEphemeris, EphemerisGateway, GeoLocation};
use panchanga_search::{
    DatedFestivals, FestivalSearch, Kundli, PanchangamReport, SankrantiEvent, SankrantiSearch,
    kundli, panchangam, vedic_day_for_date,
};
use panchanga_time::{CivilOffset, UtcTime};
use panchanga_vedic_base::muhurta::{ChoghadiyaSlot, choghadiya_day, choghadiya_night};
use panchanga_vedic_base::{FestivalRule, TimeWindow, Vaar, default_rules};

use crate::config::{Config, Options};
use crate::error::PanchangaError;

/// Longest date range [`Panchanga::festivals_between`] will walk.
pub const MAX_FESTIVAL_RANGE_DAYS: i64 = 3660;

/// Choghadiya tables for one civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoghadiyaDay {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub sunrise: f64,
    pub sunset: f64,
    pub day: Vec<ChoghadiyaSlot>,
    /// Empty when the next sunrise is unknown.
    pub night: Vec<ChoghadiyaSlot>,
}

#[derive(Debug, Clone)]
pub struct Panchanga<G = AnalyticEphemeris> {
    gateway: G,
    config: Config,
    rules: Vec<FestivalRule>,
}

impl Default for Panchanga<AnalyticEphemeris> {
    fn default() -> Self {
        Self {
            gateway: AnalyticEphemeris::new(),
            config: Config::default(),
            rules: default_rules().to_vec(),
        }
    }
}

impl Panchanga<AnalyticEphemeris> {
    pub fn new(config: Config) -> Result<Self, PanchangaError> {
        Self::with_gateway(AnalyticEphemeris::new(), config)
    }
}

impl<G: EphemerisGateway> Panchanga<G> {
    /// Engine over a caller-supplied ephemeris.
    pub fn with_gateway(gateway: G, config: Config) -> Result<Self, PanchangaError> {
        config.validate()?;
        Ok(Self {
            gateway,
            config,
            rules: default_rules().to_vec(),
        })
    }

    /// Replace the festival registry.
    pub fn with_rules(mut self, rules: Vec<FestivalRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rules(&self) -> &[FestivalRule] {
        &self.rules
    }

    fn effective(&self, options: &Options) -> Result<Config, PanchangaError> {
        let config = self.config.with_options(options);
        config.validate()?;
        Ok(config)
    }

    fn offset(config: &Config, observer: &GeoLocation) -> Result<CivilOffset, PanchangaError> {
        CivilOffset::resolve(config.timezone_offset_minutes, observer.longitude_deg)
            .map_err(|e| PanchangaError::InvalidInput(e.to_string()))
    }

    /// Full panchangam for `instant` seen from `observer`.
    pub fn compute(
        &self,
        instant: &UtcTime,
        observer: &GeoLocation,
        options: &Options,
    ) -> Result<PanchangamReport, PanchangaError> {
        instant
            .validate()
            .map_err(|e| PanchangaError::InvalidInput(e.to_string()))?;
        let config = self.effective(options)?;
        debug!(
            instant = %instant,
            lat = observer.latitude_deg,
            lon = observer.longitude_deg,
            ayanamsa = config.ayanamsa.name(),
            "compute panchangam"
        );
        let report = panchangam(
            &self.gateway,
            instant.to_jd_utc(),
            observer,
            &config.panchang(),
            &self.rules,
        )?;
        for r in &report.festival_resolutions {
            debug!(rule = r.rule, reason = ?r.reason, "festival rule resolved");
        }
        Ok(report)
    }

    /// Birth chart for `birth` at `observer`.
    pub fn compute_kundli(
        &self,
        birth: &UtcTime,
        observer: &GeoLocation,
    ) -> Result<Kundli, PanchangaError> {
        birth
            .validate()
            .map_err(|e| PanchangaError::InvalidInput(e.to_string()))?;
        debug!(
            birth = %birth,
            lat = observer.latitude_deg,
            lon = observer.longitude_deg,
            "compute kundli"
        );
        Ok(kundli(
            &self.gateway,
            birth.to_jd_utc(),
            observer,
            &self.config.kundli(),
        )?)
    }

    /// Day and night choghadiya for a civil date.
    pub fn choghadiya(
        &self,
        date: NaiveDate,
        observer: &GeoLocation,
        options: &Options,
    ) -> Result<ChoghadiyaDay, PanchangaError> {
        let config = self.effective(options)?;
        let offset = Self::offset(&config, observer)?;
        let day = vedic_day_for_date(&self.gateway, observer, date, offset, &config.riseset)?;
        let sunrise = day.sunrise.ok_or(PanchangaError::UnavailableEvent("sunrise"))?;
        let sunset = day.sunset.ok_or(PanchangaError::UnavailableEvent("sunset"))?;
        let span = TimeWindow::new(sunrise, sunset)
            .ok_or(PanchangaError::UnavailableEvent("daylight span"))?;
        let vaar = Vaar::from_date(date);
        Ok(ChoghadiyaDay {
            date,
            vaar,
            sunrise,
            sunset,
            day: choghadiya_day(span, vaar),
            night: day
                .night_span()
                .map(|night| choghadiya_night(night, vaar))
                .unwrap_or_default(),
        })
    }

    fn sankranti_search(&self, config: &Config) -> SankrantiSearch<'_, G> {
        SankrantiSearch::new(
            &self.gateway,
            config.ayanamsa,
            config.locator,
            config.sankranti.punya,
        )
    }

    /// First sankranti after `instant`.
    pub fn next_sankranti(
        &self,
        instant: &UtcTime,
        options: &Options,
    ) -> Result<SankrantiEvent, PanchangaError> {
        instant
            .validate()
            .map_err(|e| PanchangaError::InvalidInput(e.to_string()))?;
        let config = self.effective(options)?;
        self.sankranti_search(&config)
            .next(instant.to_jd_utc())?
            .ok_or(PanchangaError::UnavailableEvent("sankranti"))
    }

    /// Every sankranti in `[start, end)`.
    pub fn sankrantis_between(
        &self,
        start: &UtcTime,
        end: &UtcTime,
        options: &Options,
    ) -> Result<Vec<SankrantiEvent>, PanchangaError> {
        for t in [start, end] {
            t.validate()
                .map_err(|e| PanchangaError::InvalidInput(e.to_string()))?;
        }
        let window = TimeWindow::new(start.to_jd_utc(), end.to_jd_utc())
            .ok_or_else(|| PanchangaError::InvalidInput("end precedes start".to_string()))?;
        let config = self.effective(options)?;
        Ok(self.sankranti_search(&config).within(window)?)
    }

    /// Festivals on every civil date in `[start, end]`, dates without any
    /// omitted.
    pub fn festivals_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        observer: &GeoLocation,
        options: &Options,
    ) -> Result<Vec<DatedFestivals>, PanchangaError> {
        let days = (end - start).num_days();
        if days < 0 {
            return Err(PanchangaError::InvalidInput("end precedes start".to_string()));
        }
        if days > MAX_FESTIVAL_RANGE_DAYS {
            return Err(PanchangaError::InvalidInput(format!(
                "date range exceeds {MAX_FESTIVAL_RANGE_DAYS} days"
            )));
        }
        let config = self.effective(options)?;
        panchanga_search::validate_location(observer)?;
        debug!(%start, %end, lat = observer.latitude_deg, lon = observer.longitude_deg, "festival range");
        let search = FestivalSearch {
            gateway: &self.gateway,
            location: *observer,
            offset: Self::offset(&config, observer)?,
            model: config.ayanamsa,
            riseset: config.riseset,
            locator: config.locator,
            punya: config.sankranti.punya,
        };
        Ok(search.festivals_between(start, end, &self.rules)?)
    }
}
