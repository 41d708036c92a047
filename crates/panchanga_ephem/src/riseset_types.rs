//! Types for sunrise/sunset calculations.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, for geometric dip.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface (the observer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Horizon events of the Sun's upper limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Horizon events of the Moon's upper limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarEvent {
    Moonrise,
    Moonset,
}

impl LunarEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Moonrise)
    }
}

/// Horizon model for sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip `sqrt(2h/R)` for observer elevation. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Depression of the Sun's centre below the geometric horizon, degrees.
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 + self.dip_deg(altitude_m)
    }

    /// Geometric dip of the horizon for an elevated observer, degrees.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }
}

/// Outcome of a rise/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given JD UT.
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Sun stays below the horizon all day (polar night).
    NeverRises,
    /// Sun stays above the horizon all day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// The event instant, absent at polar latitudes.
    pub fn jd(&self) -> Option<f64> {
        match *self {
            Self::Event { jd_ut, .. } => Some(jd_ut),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
