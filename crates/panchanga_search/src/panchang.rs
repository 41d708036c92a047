//! Panchangam assembly: one report per instant and observer.

use tracing::trace;

use panchanga_ephem::{Body, EphemerisGateway, GeoLocation, ayanamsa_deg, sidereal_longitude};
use panchanga_time::{CivilOffset, UtcTime};
use panchanga_vedic_base::muhurta::{
    abhijit_muhurta, amrit_kalam, brahma_muhurta, choghadiya_day, choghadiya_night, dur_muhurtas,
    govardhan_muhurta, gowri_day, gowri_night, gulika_kalam, rahu_kalam, varjyam, yamaganda,
};
use panchanga_vedic_base::{
    FestivalRule, Karana, Nakshatra, Rashi, TimeWindow, Tithi, Vaar, Yoga, disha_shoola, horas,
    karana_from_elongation, nakshatra_from_longitude, panchak_status, special_yogas,
};

use crate::calendar::calendar_at;
use crate::elements::{ElementKind, element_angle};
use crate::error::SearchError;
use crate::festivals::FestivalSearch;
use crate::graha_positions::graha_positions;
use crate::panchang_types::{
    DayTransitions, KaranaInfo, Muhurtas, NakshatraInfo, NakshatraWindows, PanchangConfig,
    PanchangamReport, SankrantiInfo, TithiInfo, VaarInfo, YogaInfo,
};
use crate::sankranti::SankrantiSearch;
use crate::transitions::{ElementInfo, PanchangaElement, element_at, transitions_in};
use crate::vedic_day::{
    VedicDay, moon_events_on, shift_date, validate_location, vedic_day_containing,
};

// ---------------------------------------------------------------------------
// Elements at an instant
// ---------------------------------------------------------------------------

fn tithi_info(info: &ElementInfo) -> TithiInfo {
    let tithi = Tithi::from_index(info.index);
    TithiInfo {
        tithi,
        number: tithi.number(),
        name: tithi.name(),
        paksha: tithi.paksha(),
        span: info.into(),
    }
}

fn nakshatra_info(info: &ElementInfo, moon_sidereal: f64) -> NakshatraInfo {
    let nakshatra = Nakshatra::from_index(info.index);
    NakshatraInfo {
        nakshatra,
        name: nakshatra.name(),
        pada: nakshatra_from_longitude(moon_sidereal).pada,
        span: info.into(),
    }
}

fn yoga_info(info: &ElementInfo) -> YogaInfo {
    let yoga = Yoga::from_index(info.index);
    YogaInfo {
        yoga,
        name: yoga.name(),
        span: info.into(),
    }
}

fn karana_info(info: &ElementInfo, elongation: f64) -> KaranaInfo {
    let karana: Karana = karana_from_elongation(elongation).karana;
    KaranaInfo {
        karana,
        sequence_index: info.index,
        name: karana.name(),
        is_vishti: karana.is_vishti(),
        span: info.into(),
    }
}

fn vaar_info(vaar: Vaar) -> VaarInfo {
    VaarInfo {
        vaar,
        name: vaar.name(),
        english_name: vaar.english_name(),
        lord: vaar.lord(),
    }
}

// ---------------------------------------------------------------------------
// Day-level outputs
// ---------------------------------------------------------------------------

fn day_transitions<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    window: TimeWindow,
    config: &PanchangConfig,
) -> Result<DayTransitions, SearchError> {
    let list = |kind| -> Result<Vec<PanchangaElement>, SearchError> {
        transitions_in(gateway, kind, window, config.ayanamsa, &config.locator)
    };
    Ok(DayTransitions {
        tithi: list(ElementKind::Tithi)?,
        nakshatra: list(ElementKind::Nakshatra)?,
        yoga: list(ElementKind::Yoga)?,
        karana: list(ElementKind::Karana)?,
        moon_rashi: list(ElementKind::MoonRashi)?,
        sun_rashi: list(ElementKind::SunRashi)?,
    })
}

/// Muhurta windows for a day with a known sunrise and sunset.
pub fn muhurtas_for_day(day: &VedicDay, vaar: Vaar) -> Option<Muhurtas> {
    let day_span = day.day_span()?;
    let night = day.night_span();
    Some(Muhurtas {
        rahu_kalam: rahu_kalam(day_span, vaar),
        yamaganda: yamaganda(day_span, vaar),
        gulika_kalam: gulika_kalam(day_span, vaar),
        abhijit: abhijit_muhurta(day_span),
        govardhan: govardhan_muhurta(day_span),
        brahma_muhurta: day.preceding_night().map(brahma_muhurta),
        dur_muhurtas: dur_muhurtas(day_span, night, vaar),
        choghadiya_day: choghadiya_day(day_span, vaar),
        choghadiya_night: night.map(|n| choghadiya_night(n, vaar)).unwrap_or_default(),
        gowri_day: gowri_day(day_span, vaar),
        gowri_night: night.map(|n| gowri_night(n, vaar)).unwrap_or_default(),
        horas: night.map(|n| horas(day_span, n, vaar)).unwrap_or_default(),
    })
}

fn nakshatra_windows(info: &NakshatraInfo) -> Option<NakshatraWindows> {
    let span = TimeWindow::new(info.span.start_jd?, info.span.end_jd?)?;
    Some(NakshatraWindows {
        nakshatra: info.nakshatra,
        amrit_kalam: amrit_kalam(info.nakshatra, span),
        varjyam: varjyam(info.nakshatra, span),
    })
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

/// Panchangam for `jd_utc` at `location`.
///
/// Fails only on invalid input or an ephemeris error. Events that cannot be
/// found (polar sunrise, a boundary that did not converge) leave their
/// fields absent.
pub fn panchangam<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_utc: f64,
    location: &GeoLocation,
    config: &PanchangConfig,
    rules: &[FestivalRule],
) -> Result<PanchangamReport, SearchError> {
    if !jd_utc.is_finite() {
        return Err(SearchError::NonFinite("query instant"));
    }
    validate_location(location)?;
    config.validate().map_err(SearchError::InvalidConfig)?;

    let offset = CivilOffset::resolve(config.timezone_offset_minutes, location.longitude_deg)?;
    let model = config.ayanamsa;
    let locator = &config.locator;

    let day = vedic_day_containing(gateway, location, jd_utc, offset, &config.riseset)?;
    trace!(date = %day.date, polar = day.polar, "vedic day resolved");
    let vaar = Vaar::from_date(day.date);

    let at = |kind| element_at(gateway, kind, jd_utc, model, locator);
    let tithi = tithi_info(&at(ElementKind::Tithi)?);
    let nakshatra = nakshatra_info(
        &at(ElementKind::Nakshatra)?,
        element_angle(gateway, ElementKind::Nakshatra, jd_utc, model)?,
    );
    let yoga = yoga_info(&at(ElementKind::Yoga)?);
    let karana = karana_info(
        &at(ElementKind::Karana)?,
        element_angle(gateway, ElementKind::Karana, jd_utc, model)?,
    );

    let sun_nakshatra =
        nakshatra_from_longitude(sidereal_longitude(gateway, Body::Sun, jd_utc, model)?);
    let moon_rashi = Rashi::from_index(
        ElementKind::MoonRashi.index_of(element_angle(gateway, ElementKind::MoonRashi, jd_utc, model)?),
    );
    let moon_events = moon_events_on(gateway, location, day.date, offset, &config.riseset)?;

    let transitions = day_transitions(gateway, day.window, config)?;
    let calendar = calendar_at(
        gateway,
        jd_utc,
        day.date,
        tithi.paksha,
        model,
        config.masa_convention,
        locator,
        &config.punya,
    )?;

    let sankrantis = SankrantiSearch::new(gateway, model, *locator, config.punya);
    let civil_day = TimeWindow::new(
        offset.local_midnight_jd(day.date),
        offset.local_midnight_jd(shift_date(day.date, 1)?),
    )
    .ok_or(SearchError::NonFinite("civil day bounds"))?;
    let sankranti = SankrantiInfo {
        today: sankrantis.within(civil_day)?,
        next: sankrantis.next(jd_utc)?,
    };

    let sunrise_nakshatra = match day.sunrise {
        Some(jd) => Nakshatra::from_index(
            ElementKind::Nakshatra.index_of(element_angle(gateway, ElementKind::Nakshatra, jd, model)?),
        ),
        None => nakshatra.nakshatra,
    };

    let festival_search = FestivalSearch {
        gateway,
        location: *location,
        offset,
        model,
        riseset: config.riseset,
        locator: *locator,
        punya: config.punya,
    };
    let outcome = festival_search.festivals_for_day(&day, rules)?;

    Ok(PanchangamReport {
        instant: UtcTime::from_jd_utc(jd_utc)?,
        jd_utc,
        location: *location,
        timezone_offset_minutes: offset.minutes(),
        ayanamsa: model,
        ayanamsa_deg: ayanamsa_deg(model, jd_utc),
        date: day.date,
        vedic_day: day,
        nakshatra_windows: nakshatra_windows(&nakshatra),
        panchak: panchak_status(nakshatra.nakshatra, vaar),
        special_yogas: special_yogas(vaar, sunrise_nakshatra),
        tithi,
        nakshatra,
        yoga,
        karana,
        vaar: vaar_info(vaar),
        sun_nakshatra,
        moon_rashi,
        transitions,
        calendar,
        grahas: graha_positions(gateway, jd_utc, model)?,
        muhurtas: muhurtas_for_day(&day, vaar),
        moon_events,
        sankranti,
        disha_shoola: disha_shoola(vaar),
        festivals: outcome.festivals,
        festival_resolutions: outcome.resolutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_ephem::AnalyticEphemeris;
    use panchanga_vedic_base::{Paksha, default_rules};

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090, 0.0)
    }

    fn ist() -> PanchangConfig {
        PanchangConfig {
            timezone_offset_minutes: Some(330),
            ..PanchangConfig::default()
        }
    }

    #[test]
    fn report_for_maha_shivaratri_evening() {
        let gw = AnalyticEphemeris::new();
        // 2026-02-15 20:00 IST.
        let jd = UtcTime::new(2026, 2, 15, 14, 30, 0.0).to_jd_utc();
        let r = panchangam(&gw, jd, &delhi(), &ist(), default_rules()).unwrap();
        assert_eq!(r.date.to_string(), "2026-02-15");
        assert_eq!(r.tithi.number, 29);
        assert_eq!(r.tithi.paksha, Paksha::Krishna);
        assert_eq!(r.vaar.vaar, Vaar::Ravivaar);
        assert!(r.festivals.iter().any(|f| f.name == "Maha Shivaratri"));
        assert!(r.muhurtas.is_some());
        assert_eq!(r.grahas.len(), 9);
        let first = &r.transitions.tithi[0];
        assert_eq!(first.start_jd, r.vedic_day.window.start_jd);
        assert_eq!(r.transitions.tithi.last().unwrap().end_jd, r.vedic_day.window.end_jd);
    }

    #[test]
    fn report_carries_sun_moon_and_shoola() {
        let gw = AnalyticEphemeris::new();
        let jd = UtcTime::new(2026, 2, 15, 6, 30, 0.0).to_jd_utc();
        let r = panchangam(&gw, jd, &delhi(), &ist(), default_rules()).unwrap();
        // Sidereal Sun in Kumbha mid-February: Dhanishta or Shatabhisha.
        assert!(matches!(
            r.sun_nakshatra.nakshatra,
            Nakshatra::Dhanishta | Nakshatra::Shatabhisha
        ));
        let surya = &r.grahas[0];
        assert_eq!(surya.nakshatra, r.sun_nakshatra.nakshatra);
        let chandra = &r.grahas[1];
        assert_eq!(chandra.rashi, r.moon_rashi);
        assert_eq!(r.disha_shoola.direction, panchanga_vedic_base::Direction::West);
        assert!(r.moon_events.moonrise.is_some());
        let m = r.muhurtas.as_ref().unwrap();
        let day = r.vedic_day.day_span().unwrap();
        assert!(m.govardhan.start_jd > m.abhijit.end_jd);
        assert!(m.govardhan.end_jd < day.end_jd);
    }

    #[test]
    fn balam_against_a_birth_moon() {
        let gw = AnalyticEphemeris::new();
        let jd = UtcTime::new(2026, 2, 15, 6, 30, 0.0).to_jd_utc();
        let r = panchangam(&gw, jd, &delhi(), &ist(), default_rules()).unwrap();
        let chandra = r.grahas[1].sidereal_longitude;
        let same = r.balam_for(&panchanga_vedic_base::MoonChart::from_longitude(chandra));
        assert_eq!(same.tarabalam.tara, panchanga_vedic_base::Tara::Janma);
        assert_eq!(same.chandrabalam.position, 1);
        assert!(!same.chandrashtama.active);
        // Born with the Moon seven signs behind today's: Chandrashtama.
        let behind = panchanga_vedic_base::MoonChart::from_longitude(chandra - 210.0);
        assert!(r.balam_for(&behind).chandrashtama.active);
    }

    #[test]
    fn polar_query_degrades() {
        let gw = AnalyticEphemeris::new();
        let loc = GeoLocation::new(78.22, 15.65, 0.0);
        let cfg = PanchangConfig {
            timezone_offset_minutes: Some(60),
            ..PanchangConfig::default()
        };
        let jd = UtcTime::new(2025, 12, 21, 12, 0, 0.0).to_jd_utc();
        let r = panchangam(&gw, jd, &loc, &cfg, default_rules()).unwrap();
        assert!(r.vedic_day.polar);
        assert!(r.muhurtas.is_none());
        assert!(!r.transitions.tithi.is_empty());
    }

    #[test]
    fn invalid_input_fails_fast() {
        let gw = AnalyticEphemeris::new();
        let jd = UtcTime::new(2026, 2, 15, 6, 0, 0.0).to_jd_utc();
        let bad = GeoLocation::new(120.0, 0.0, 0.0);
        assert!(matches!(
            panchangam(&gw, jd, &bad, &ist(), default_rules()),
            Err(SearchError::InvalidLocation(_))
        ));
        assert!(matches!(
            panchangam(&gw, f64::NAN, &delhi(), &ist(), default_rules()),
            Err(SearchError::NonFinite(_))
        ));
        let cfg = PanchangConfig {
            timezone_offset_minutes: Some(15 * 60),
            ..PanchangConfig::default()
        };
        assert!(matches!(
            panchangam(&gw, jd, &delhi(), &cfg, default_rules()),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
