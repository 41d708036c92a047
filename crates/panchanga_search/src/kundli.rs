//! Birth chart (kundli): Moon, lagna, graha placements, divisional charts
//! and Vimshottari dasha.
//!
//! Houses are whole-sign from the lagna: the lagna's rashi is house 1. Each
//! divisional chart counts its houses from its own lagna sign.

use serde::{Deserialize, Serialize};

use panchanga_ephem::{
    AyanamsaModel, Body, EphemerisGateway, GeoLocation, ayanamsa_deg, lagna_longitude_deg,
    sidereal_longitude,
};
use panchanga_time::UtcTime;
use panchanga_vedic_base::dasha::{DEFAULT_DASHA_DEPTH, MAX_DASHA_DEPTH};
use panchanga_vedic_base::util::normalize_360;
use panchanga_vedic_base::{
    ALL_VARGAS, DashaHierarchy, DashaSnapshot, Graha, MangalDosha, MangalReference, MoonChart,
    Nakshatra, Rashi, Varga, mangal_dosha, nakshatra_from_longitude, rashi_from_longitude,
    vimshottari_hierarchy, vimshottari_snapshot,
};

use crate::error::SearchError;
use crate::graha_positions::{GrahaEntry, graha_positions};
use crate::vedic_day::validate_location;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KundliConfig {
    pub ayanamsa: AyanamsaModel,
    /// Dasha levels to build, 1..=5. Default: 3 (down to Pratyantardasha).
    pub dasha_depth: u8,
    /// House Mangal Dosha is counted from. Default: lagna.
    pub mangal_reference: MangalReference,
}

impl Default for KundliConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaModel::default(),
            dasha_depth: DEFAULT_DASHA_DEPTH,
            mangal_reference: MangalReference::default(),
        }
    }
}

impl KundliConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=MAX_DASHA_DEPTH).contains(&self.dasha_depth) {
            return Err("dasha_depth must be within 1..=5");
        }
        Ok(())
    }
}

/// Sidereal ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lagna {
    pub longitude: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// One whole-sign house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bhava {
    /// 1..=12.
    pub number: u8,
    pub rashi: Rashi,
    pub grahas: Vec<Graha>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPlacement {
    pub graha: Graha,
    pub rashi: Rashi,
}

/// A divisional chart with its own lagna and whole-sign houses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VargaChart {
    pub varga: Varga,
    pub name: &'static str,
    pub lagna: Rashi,
    pub placements: Vec<VargaPlacement>,
    pub houses: Vec<Bhava>,
}

fn whole_sign_houses(lagna: Rashi, placements: &[(Graha, Rashi)]) -> Vec<Bhava> {
    (1..=12u8)
        .map(|number| {
            let rashi = lagna.offset(i32::from(number) - 1);
            Bhava {
                number,
                rashi,
                grahas: placements
                    .iter()
                    .filter(|(_, r)| *r == rashi)
                    .map(|(g, _)| *g)
                    .collect(),
            }
        })
        .collect()
}

fn varga_chart(varga: Varga, lagna_longitude: f64, grahas: &[GrahaEntry]) -> VargaChart {
    let lagna = varga.rashi_of(lagna_longitude);
    let signs: Vec<(Graha, Rashi)> = grahas
        .iter()
        .map(|g| (g.graha, varga.rashi_of(g.sidereal_longitude)))
        .collect();
    VargaChart {
        varga,
        name: varga.name(),
        lagna,
        placements: signs
            .iter()
            .map(|&(graha, rashi)| VargaPlacement { graha, rashi })
            .collect(),
        houses: whole_sign_houses(lagna, &signs),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Kundli {
    pub birth: UtcTime,
    pub birth_jd: f64,
    pub location: GeoLocation,
    pub ayanamsa: AyanamsaModel,
    pub ayanamsa_deg: f64,
    /// Moon's sidereal longitude, degrees.
    pub moon_longitude: f64,
    pub moon: MoonChart,
    pub lagna: Lagna,
    /// Nine grahas with `house` filled in.
    pub grahas: Vec<GrahaEntry>,
    pub houses: Vec<Bhava>,
    /// D1 through D12, in [`ALL_VARGAS`] order.
    pub vargas: Vec<VargaChart>,
    pub dasha: DashaHierarchy,
    /// Dasha chain running at birth.
    pub birth_dasha: DashaSnapshot,
    pub mangal_dosha: MangalDosha,
    pub dasha_depth: u8,
}

impl Kundli {
    pub fn rashi(&self) -> Rashi {
        self.moon.rashi.rashi
    }

    pub fn nakshatra(&self) -> Nakshatra {
        self.moon.nakshatra.nakshatra
    }

    pub fn pada(&self) -> u8 {
        self.moon.nakshatra.pada
    }

    pub fn varga(&self, varga: Varga) -> Option<&VargaChart> {
        self.vargas.iter().find(|c| c.varga == varga)
    }

    pub fn navamsa(&self) -> Option<&VargaChart> {
        self.varga(Varga::D9)
    }

    /// Dasha chain running at any instant, to this chart's depth.
    pub fn dasha_at(&self, jd_utc: f64) -> DashaSnapshot {
        vimshottari_snapshot(self.birth_jd, self.moon_longitude, jd_utc, self.dasha_depth)
    }

    /// Mangal Dosha counted from a different reference than the one the
    /// chart was built with.
    pub fn mangal_dosha_from(&self, reference: MangalReference) -> MangalDosha {
        let reference_rashi = match reference {
            MangalReference::Lagna => self.lagna.rashi,
            MangalReference::Moon => self.rashi(),
        };
        let mars = self.grahas[Graha::Mangal.index() as usize].rashi;
        mangal_dosha(mars, reference_rashi, reference)
    }
}

fn lagna<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamsaModel,
) -> Result<Lagna, SearchError> {
    let obliquity = gateway.true_obliquity_deg(jd_utc)?;
    let tropical = lagna_longitude_deg(jd_utc, location, obliquity);
    let longitude = normalize_360(tropical - ayanamsa_deg(model, jd_utc));
    let rashi = rashi_from_longitude(longitude);
    let nak = nakshatra_from_longitude(longitude);
    Ok(Lagna {
        longitude,
        rashi: rashi.rashi,
        degrees_in_rashi: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    })
}

/// Build the birth chart for `birth_jd` (JD UTC) at `location`.
pub fn kundli<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    birth_jd: f64,
    location: &GeoLocation,
    config: &KundliConfig,
) -> Result<Kundli, SearchError> {
    if !birth_jd.is_finite() {
        return Err(SearchError::NonFinite("birth instant"));
    }
    validate_location(location)?;
    config.validate().map_err(SearchError::InvalidConfig)?;
    let model = config.ayanamsa;

    let moon_longitude = sidereal_longitude(gateway, Body::Moon, birth_jd, model)?;
    let lagna = lagna(gateway, birth_jd, location, model)?;

    let mut grahas = graha_positions(gateway, birth_jd, model)?;
    for g in &mut grahas {
        g.house = Some(lagna.rashi.house_from(g.rashi));
    }
    let signs: Vec<(Graha, Rashi)> = grahas.iter().map(|g| (g.graha, g.rashi)).collect();
    let houses = whole_sign_houses(lagna.rashi, &signs);
    let vargas = ALL_VARGAS
        .iter()
        .map(|&v| varga_chart(v, lagna.longitude, &grahas))
        .collect();

    let dasha = vimshottari_hierarchy(birth_jd, moon_longitude, config.dasha_depth)?;
    let birth_dasha = vimshottari_snapshot(birth_jd, moon_longitude, birth_jd, config.dasha_depth);

    let moon = MoonChart::from_longitude(moon_longitude);
    let reference_rashi = match config.mangal_reference {
        MangalReference::Lagna => lagna.rashi,
        MangalReference::Moon => moon.rashi.rashi,
    };
    let mars = grahas[Graha::Mangal.index() as usize].rashi;

    Ok(Kundli {
        birth: UtcTime::from_jd_utc(birth_jd)?,
        birth_jd,
        location: *location,
        ayanamsa: model,
        ayanamsa_deg: ayanamsa_deg(model, birth_jd),
        moon_longitude,
        moon,
        lagna,
        grahas,
        houses,
        vargas,
        dasha,
        birth_dasha,
        mangal_dosha: mangal_dosha(mars, reference_rashi, config.mangal_reference),
        dasha_depth: config.dasha_depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_ephem::AnalyticEphemeris;
    use panchanga_vedic_base::dasha::DashaLevel;

    fn chart() -> Kundli {
        let gw = AnalyticEphemeris::new();
        let jd = UtcTime::new(1990, 7, 15, 4, 30, 0.0).to_jd_utc();
        kundli(&gw, jd, &GeoLocation::new(19.076, 72.8777, 0.0), &KundliConfig::default()).unwrap()
    }

    #[test]
    fn houses_follow_lagna() {
        let k = chart();
        assert_eq!(k.houses.len(), 12);
        assert_eq!(k.houses[0].rashi, k.lagna.rashi);
        let placed: usize = k.houses.iter().map(|h| h.grahas.len()).sum();
        assert_eq!(placed, 9);
        for g in &k.grahas {
            let h = g.house.unwrap();
            assert!(k.houses[usize::from(h) - 1].grahas.contains(&g.graha));
        }
    }

    #[test]
    fn divisional_charts() {
        let k = chart();
        assert_eq!(k.vargas.len(), 8);
        let d1 = k.varga(Varga::D1).unwrap();
        assert_eq!(d1.lagna, k.lagna.rashi);
        assert_eq!(d1.houses, k.houses);
        let d9 = k.navamsa().unwrap();
        assert_eq!(d9.name, "Navamsha");
        assert_eq!(d9.placements.len(), 9);
        assert_eq!(d9.houses[0].rashi, d9.lagna);
        for p in &d9.placements {
            let lon = k.grahas[p.graha.index() as usize].sidereal_longitude;
            assert_eq!(p.rashi, Varga::D9.rashi_of(lon));
        }
        let placed: usize = d9.houses.iter().map(|h| h.grahas.len()).sum();
        assert_eq!(placed, 9);
    }

    #[test]
    fn dasha_tree_and_birth_chain() {
        let k = chart();
        assert_eq!(k.dasha.levels.len(), 3);
        assert_eq!(k.birth_dasha.periods.len(), 3);
        assert_eq!(k.birth_dasha.periods[0].level, DashaLevel::Mahadasha);
        assert_eq!(k.birth_dasha.periods[0], k.dasha.levels[0][0]);
        let later = k.dasha_at(k.birth_jd + 3650.0);
        assert_eq!(later.periods.len(), 3);
        assert!(later.periods[2].contains(k.birth_jd + 3650.0));
    }

    #[test]
    fn mangal_reference_switch() {
        let k = chart();
        let from_moon = k.mangal_dosha_from(MangalReference::Moon);
        assert_eq!(from_moon.reference, MangalReference::Moon);
        assert_eq!(k.mangal_dosha_from(MangalReference::Lagna), k.mangal_dosha);
    }

    #[test]
    fn depth_is_validated() {
        let gw = AnalyticEphemeris::new();
        let cfg = KundliConfig {
            dasha_depth: 0,
            ..KundliConfig::default()
        };
        let r = kundli(&gw, 2_451_545.0, &GeoLocation::new(0.0, 0.0, 0.0), &cfg);
        assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
    }
}
