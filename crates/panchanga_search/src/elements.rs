//! The angular quantities behind each panchanga element.

use serde::Serialize;

use panchanga_ephem::{AyanamsaModel, Body, EphemerisGateway, sidereal_longitude};
use panchanga_vedic_base::karana::KARANA_SPAN;
use panchanga_vedic_base::nakshatra::NAKSHATRA_SPAN;
use panchanga_vedic_base::rashi::RASHI_SPAN;
use panchanga_vedic_base::tithi::TITHI_SPAN;
use panchanga_vedic_base::util::{normalize_360, segment_index};
use panchanga_vedic_base::yoga::YOGA_SPAN;
use panchanga_vedic_base::{Karana, Nakshatra, Rashi, Tithi, Yoga};

use crate::error::SearchError;

/// An element that advances through equal sectors of a monotone angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    MoonRashi,
    SunRashi,
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] = [
        Self::Tithi,
        Self::Nakshatra,
        Self::Yoga,
        Self::Karana,
        Self::MoonRashi,
        Self::SunRashi,
    ];

    /// Sector width in degrees.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SPAN,
            Self::Nakshatra => NAKSHATRA_SPAN,
            Self::Yoga => YOGA_SPAN,
            Self::Karana => KARANA_SPAN,
            Self::MoonRashi | Self::SunRashi => RASHI_SPAN,
        }
    }

    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
            Self::MoonRashi | Self::SunRashi => 12,
        }
    }

    /// Largest plausible distance between two boundaries, in days, used as
    /// the search horizon in either direction.
    pub const fn horizon_days(self) -> f64 {
        match self {
            Self::Karana => 1.5,
            Self::Tithi | Self::Nakshatra | Self::Yoga => 3.0,
            Self::MoonRashi => 3.5,
            Self::SunRashi => 35.0,
        }
    }

    /// Step floor for slow angles.
    pub const fn min_step_days(self) -> f64 {
        match self {
            Self::SunRashi => 1.0,
            _ => 0.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
            Self::MoonRashi => "moon rashi",
            Self::SunRashi => "sun rashi",
        }
    }

    /// Display name of sector `index` (0-based).
    pub fn name_of(self, index: u8) -> &'static str {
        match self {
            Self::Tithi => Tithi::from_index(index).name(),
            Self::Nakshatra => Nakshatra::from_index(index).name(),
            Self::Yoga => Yoga::from_index(index).name(),
            Self::Karana => Karana::from_sequence_index(index).name(),
            Self::MoonRashi | Self::SunRashi => Rashi::from_index(index).name(),
        }
    }

    /// Sector holding `angle_deg`.
    pub fn index_of(self, angle_deg: f64) -> u8 {
        segment_index(angle_deg, self.span_deg(), self.count())
    }

    /// Sector that begins at a boundary angle.
    pub fn index_starting_at(self, boundary_deg: f64) -> u8 {
        let raw = (normalize_360(boundary_deg) / self.span_deg()).round() as u32;
        (raw % u32::from(self.count())) as u8
    }
}

/// Moon minus Sun, tropical, in [0, 360). Ayanamsa cancels out.
pub fn elongation_deg<G: EphemerisGateway + ?Sized>(gateway: &G, jd_ut: f64) -> Result<f64, SearchError> {
    let moon = gateway.tropical_longitude(Body::Moon, jd_ut)?;
    let sun = gateway.tropical_longitude(Body::Sun, jd_ut)?;
    Ok(normalize_360(moon - sun))
}

/// Angle driving `kind` at `jd_ut`, in [0, 360).
pub fn element_angle<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    kind: ElementKind,
    jd_ut: f64,
    model: AyanamsaModel,
) -> Result<f64, SearchError> {
    let angle = match kind {
        ElementKind::Tithi | ElementKind::Karana => elongation_deg(gateway, jd_ut)?,
        ElementKind::Nakshatra | ElementKind::MoonRashi => {
            sidereal_longitude(gateway, Body::Moon, jd_ut, model)?
        }
        ElementKind::SunRashi => sidereal_longitude(gateway, Body::Sun, jd_ut, model)?,
        ElementKind::Yoga => {
            let moon = sidereal_longitude(gateway, Body::Moon, jd_ut, model)?;
            let sun = sidereal_longitude(gateway, Body::Sun, jd_ut, model)?;
            normalize_360(moon + sun)
        }
    };
    Ok(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_ephem::AnalyticEphemeris;

    #[test]
    fn counts_cover_the_circle() {
        for kind in ElementKind::ALL {
            let total = kind.span_deg() * f64::from(kind.count());
            assert!((total - 360.0).abs() < 1e-9, "{kind:?}");
        }
    }

    #[test]
    fn boundary_index_rounds_and_wraps() {
        assert_eq!(ElementKind::Tithi.index_starting_at(0.0), 0);
        assert_eq!(ElementKind::Tithi.index_starting_at(359.999_999), 0);
        assert_eq!(ElementKind::Tithi.index_starting_at(168.0), 14);
        assert_eq!(ElementKind::Nakshatra.index_starting_at(40.0), 3);
    }

    #[test]
    fn names() {
        assert_eq!(ElementKind::Nakshatra.name_of(3), "Rohini");
        assert_eq!(ElementKind::Karana.name_of(0), "Kimstughna");
        assert_eq!(ElementKind::SunRashi.name_of(9), Rashi::Makara.name());
    }

    #[test]
    fn new_moon_elongation_is_small() {
        // New moon 2026-02-17 12:01 UTC.
        let gw = AnalyticEphemeris::new();
        let e = elongation_deg(&gw, 2_461_089.0).unwrap();
        assert!(e < 1.0 || e > 359.0, "{e}");
    }
}
