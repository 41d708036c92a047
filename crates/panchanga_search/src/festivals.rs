//! Assembling festival days from the sky and running the rule engine.

use chrono::NaiveDate;
use serde::Serialize;

use panchanga_ephem::{AyanamsaModel, Body, EphemerisGateway, GeoLocation, RiseSetConfig, RiseSetEvent, sidereal_longitude};
use panchanga_time::CivilOffset;
use panchanga_vedic_base::{
    FestivalDay, FestivalOutcome, FestivalRule, MomentElements, SankrantiDay, TimeWindow, Tithi,
    evaluate_festivals, nakshatra_from_longitude, rashi_from_longitude, tithi_from_elongation,
};

use crate::calendar::MasaResolver;
use crate::elements::{ElementKind, elongation_deg};
use crate::error::SearchError;
use crate::locator::LocatorConfig;
use crate::sankranti::{PunyaKalamConfig, SankrantiSearch};
use crate::transitions::{SegmentStatus, transitions_in};
use crate::vedic_day::{VedicDay, shift_date, solar_event, vedic_day_for_date};

/// Days either side of a date searched for sankrantis; covers the widest
/// sankranti-relative span in the registry.
const SANKRANTI_MARGIN_DAYS: i64 = 4;

/// Festivals observed on one civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedFestivals {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub outcome: FestivalOutcome,
}

/// Observer and settings shared by every festival query.
pub struct FestivalSearch<'g, G: ?Sized> {
    pub gateway: &'g G,
    pub location: GeoLocation,
    pub offset: CivilOffset,
    pub model: AyanamsaModel,
    pub riseset: RiseSetConfig,
    pub locator: LocatorConfig,
    pub punya: PunyaKalamConfig,
}

impl<G: EphemerisGateway + ?Sized> FestivalSearch<'_, G> {
    fn tithi_at(&self, jd: f64) -> Result<Tithi, SearchError> {
        Ok(tithi_from_elongation(elongation_deg(self.gateway, jd)?).tithi)
    }

    fn moment(&self, masas: &mut MasaResolver<'_, G>, jd: f64) -> Result<Option<MomentElements>, SearchError> {
        let Some(month) = masas.at(jd)? else {
            return Ok(None);
        };
        let moon = sidereal_longitude(self.gateway, Body::Moon, jd, self.model)?;
        let sun = sidereal_longitude(self.gateway, Body::Sun, jd, self.model)?;
        Ok(Some(MomentElements {
            tithi: self.tithi_at(jd)?,
            nakshatra: nakshatra_from_longitude(moon).nakshatra,
            masa: month.info.masa,
            adhika: month.info.adhika,
            sun_rashi: rashi_from_longitude(sun).rashi,
        }))
    }

    fn solar(&self, date: NaiveDate, event: RiseSetEvent) -> Result<Option<f64>, SearchError> {
        solar_event(self.gateway, &self.location, date, self.offset, event, &self.riseset)
    }

    /// Civil date a sankranti is kept on: its local date, or the next one
    /// when the ingress falls after that date's sunset.
    fn sankranti_date(&self, jd: f64) -> Result<NaiveDate, SearchError> {
        let date = self.offset.local_date(jd)?;
        match self.solar(date, RiseSetEvent::Sunset)? {
            Some(sunset) if jd >= sunset => shift_date(date, 1),
            _ => Ok(date),
        }
    }

    fn sankrantis_near(&self, date: NaiveDate) -> Result<Vec<SankrantiDay>, SearchError> {
        let from = self.offset.local_midnight_jd(shift_date(date, -SANKRANTI_MARGIN_DAYS)?);
        let to = self.offset.local_midnight_jd(shift_date(date, SANKRANTI_MARGIN_DAYS + 1)?);
        let window = TimeWindow::new(from, to).ok_or(SearchError::NonFinite("sankranti window"))?;
        let search = SankrantiSearch::new(self.gateway, self.model, self.locator, self.punya);
        search
            .within(window)?
            .into_iter()
            .map(|ev| {
                Ok(SankrantiDay {
                    rashi: ev.rashi,
                    date: self.sankranti_date(ev.jd)?,
                })
            })
            .collect()
    }

    /// Rule-engine input for an already resolved Vedic day. `None` when the
    /// lunar month at sunrise cannot be determined.
    pub fn festival_day(&self, day: &VedicDay) -> Result<Option<FestivalDay>, SearchError> {
        let mut masas = MasaResolver::new(self.gateway, self.model, self.locator);
        let anchor = day.sunrise.unwrap_or(day.window.start_jd);
        let Some(sunrise) = self.moment(&mut masas, anchor)? else {
            return Ok(None);
        };
        let sunset = match day.sunset {
            Some(jd) => self.moment(&mut masas, jd)?,
            None => None,
        };

        let mut kshaya = Vec::new();
        let tithis = transitions_in(self.gateway, ElementKind::Tithi, day.window, self.model, &self.locator)?;
        for seg in tithis.iter().filter(|s| s.status == SegmentStatus::Skipped) {
            if let Some(m) = self.moment(&mut masas, 0.5 * (seg.start_jd + seg.end_jd))? {
                kshaya.push(m);
            }
        }

        let previous_date = shift_date(day.date, -1)?;
        let previous_sunrise_tithi = match self.solar(previous_date, RiseSetEvent::Sunrise)? {
            Some(jd) => Some(self.tithi_at(jd)?),
            None => None,
        };
        let previous_sunset_tithi = match day.prev_sunset {
            Some(jd) => Some(self.tithi_at(jd)?),
            None => None,
        };

        Ok(Some(FestivalDay {
            date: day.date,
            sunrise,
            kshaya,
            sunset,
            previous_sunrise_tithi,
            previous_sunset_tithi,
            sankrantis: self.sankrantis_near(day.date)?,
        }))
    }

    /// Festivals for the Vedic day opened by the sunrise of `date`.
    pub fn festivals_on(&self, date: NaiveDate, rules: &[FestivalRule]) -> Result<FestivalOutcome, SearchError> {
        let day = vedic_day_for_date(self.gateway, &self.location, date, self.offset, &self.riseset)?;
        self.festivals_for_day(&day, rules)
    }

    pub fn festivals_for_day(&self, day: &VedicDay, rules: &[FestivalRule]) -> Result<FestivalOutcome, SearchError> {
        Ok(self
            .festival_day(day)?
            .map(|d| evaluate_festivals(&d, rules))
            .unwrap_or_default())
    }

    /// Every date in `[start, end]` with at least one festival.
    pub fn festivals_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        rules: &[FestivalRule],
    ) -> Result<Vec<DatedFestivals>, SearchError> {
        let mut out = Vec::new();
        for date in start.iter_days().take_while(|d| *d <= end) {
            let outcome = self.festivals_on(date, rules)?;
            if !outcome.festivals.is_empty() {
                out.push(DatedFestivals { date, outcome });
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_ephem::AnalyticEphemeris;
    use panchanga_vedic_base::default_rules;

    fn delhi(gw: &AnalyticEphemeris) -> FestivalSearch<'_, AnalyticEphemeris> {
        FestivalSearch {
            gateway: gw,
            location: GeoLocation::new(28.6139, 77.2090, 0.0),
            offset: CivilOffset::from_minutes(330).unwrap(),
            model: AyanamsaModel::Lahiri,
            riseset: RiseSetConfig::default(),
            locator: LocatorConfig::default(),
            punya: PunyaKalamConfig::default(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(outcome: &FestivalOutcome) -> Vec<&str> {
        outcome.festivals.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn shivaratri_days_in_new_delhi() {
        let gw = AnalyticEphemeris::new();
        let s = delhi(&gw);
        let rules = default_rules();
        let feb14 = s.festivals_on(date(2026, 2, 14), rules).unwrap();
        let feb15 = s.festivals_on(date(2026, 2, 15), rules).unwrap();
        let feb16 = s.festivals_on(date(2026, 2, 16), rules).unwrap();
        assert!(!names(&feb14).contains(&"Maha Shivaratri"));
        assert!(names(&feb15).contains(&"Maha Shivaratri"));
        assert!(!names(&feb16).contains(&"Maha Shivaratri"));
        assert!(names(&feb16).contains(&"Masik Shivaratri"));
    }

    #[test]
    fn makar_sankranti_and_pongal_days() {
        let gw = AnalyticEphemeris::new();
        let s = delhi(&gw);
        let rules = default_rules();
        let jan14 = s.festivals_on(date(2026, 1, 14), rules).unwrap();
        assert!(names(&jan14).contains(&"Makar Sankranti"));
        let jan13 = s.festivals_on(date(2026, 1, 13), rules).unwrap();
        assert!(names(&jan13).iter().any(|n| n.starts_with("Pongal")));
    }

    #[test]
    fn range_lists_only_festival_days() {
        let gw = AnalyticEphemeris::new();
        let s = delhi(&gw);
        let list = s.festivals_between(date(2026, 2, 10), date(2026, 2, 18), default_rules()).unwrap();
        assert!(list.iter().all(|d| !d.outcome.festivals.is_empty()));
        assert!(list.iter().any(|d| d.date == date(2026, 2, 15)));
        assert!(list.windows(2).all(|w| w[0].date < w[1].date));
    }
}
