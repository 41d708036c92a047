//! Sidereal positions of the nine grahas.

use serde::Serialize;

use panchanga_ephem::{AyanamsaModel, Body, EphemerisGateway, sidereal_longitude};
use panchanga_vedic_base::util::normalize_360;
use panchanga_vedic_base::{
    ALL_GRAHAS, Dignity, Graha, Nakshatra, Rashi, dignity_in, nakshatra_from_longitude,
    rashi_from_longitude,
};

use crate::error::SearchError;

/// Position details for a single graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaEntry {
    pub graha: Graha,
    /// Sidereal longitude in degrees [0, 360).
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// 1..=4.
    pub pada: u8,
    /// Longitude rate, degrees/day.
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub dignity: Dignity,
    /// Whole-sign house from the lagna, 1..=12; set only in a kundli.
    pub house: Option<u8>,
}

/// Ketu has no body of its own; it sits opposite Rahu.
const fn body_for(graha: Graha) -> Body {
    match graha {
        Graha::Surya => Body::Sun,
        Graha::Chandra => Body::Moon,
        Graha::Mangal => Body::Mars,
        Graha::Buddh => Body::Mercury,
        Graha::Guru => Body::Jupiter,
        Graha::Shukra => Body::Venus,
        Graha::Shani => Body::Saturn,
        Graha::Rahu | Graha::Ketu => Body::MeanNode,
    }
}

/// Sidereal longitude of any graha.
pub fn graha_sidereal_longitude<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    graha: Graha,
    jd_ut: f64,
    model: AyanamsaModel,
) -> Result<f64, SearchError> {
    let lon = sidereal_longitude(gateway, body_for(graha), jd_ut, model)?;
    Ok(match graha {
        Graha::Ketu => normalize_360(lon + 180.0),
        _ => lon,
    })
}

fn entry<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    graha: Graha,
    jd_ut: f64,
    model: AyanamsaModel,
) -> Result<GrahaEntry, SearchError> {
    let sidereal_longitude = graha_sidereal_longitude(gateway, graha, jd_ut, model)?;
    let speed = gateway.longitude_rate(body_for(graha), jd_ut)?;
    let rashi = rashi_from_longitude(sidereal_longitude);
    let nak = nakshatra_from_longitude(sidereal_longitude);
    Ok(GrahaEntry {
        graha,
        sidereal_longitude,
        rashi: rashi.rashi,
        degrees_in_rashi: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        speed_deg_per_day: speed,
        retrograde: speed < 0.0,
        dignity: dignity_in(graha, rashi.rashi),
        house: None,
    })
}

/// All nine grahas in [`ALL_GRAHAS`] order.
pub fn graha_positions<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    model: AyanamsaModel,
) -> Result<Vec<GrahaEntry>, SearchError> {
    if !jd_ut.is_finite() {
        return Err(SearchError::NonFinite("graha positions instant"));
    }
    ALL_GRAHAS
        .iter()
        .map(|&g| entry(gateway, g, jd_ut, model))
        .collect()
}
