//! The ephemeris seam consumed by the calendar layers.

use panchanga_frames::normalize_deg;

use crate::ayanamsa::{AyanamsaModel, ayanamsa_deg};
use crate::body::Body;
use crate::error::EphemError;

/// Half-width of the central difference used for longitude rates, in days.
const RATE_HALF_STEP_DAYS: f64 = 30.0 / 1440.0;

/// Apparent geocentric equatorial position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEquatorial {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub distance_au: f64,
}

/// Apparent geocentric equatorial position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEquatorial {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub distance_km: f64,
    /// Equatorial horizontal parallax, degrees.
    pub parallax_deg: f64,
}

/// Instantaneous positions of the Sun, Moon, planets and lunar node.
///
/// All times are JD UT. Longitudes are apparent, geocentric, referred to
/// the true ecliptic and equinox of date, in [0, 360).
pub trait EphemerisGateway: Send + Sync {
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError>;

    fn sun_equatorial(&self, jd_ut: f64) -> Result<SunEquatorial, EphemError>;

    fn moon_equatorial(&self, jd_ut: f64) -> Result<MoonEquatorial, EphemError>;

    /// True obliquity of the ecliptic of date, degrees.
    fn true_obliquity_deg(&self, jd_ut: f64) -> Result<f64, EphemError>;

    /// Longitude rate in degrees/day; negative means retrograde.
    fn longitude_rate(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        let before = self.tropical_longitude(body, jd_ut - RATE_HALF_STEP_DAYS)?;
        let after = self.tropical_longitude(body, jd_ut + RATE_HALF_STEP_DAYS)?;
        let mut delta = after - before;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }
        Ok(delta / (2.0 * RATE_HALF_STEP_DAYS))
    }
}

/// Sidereal longitude: tropical minus the model's true ayanamsa.
pub fn sidereal_longitude<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    body: Body,
    jd_ut: f64,
    model: AyanamsaModel,
) -> Result<f64, EphemError> {
    let tropical = gateway.tropical_longitude(body, jd_ut)?;
    Ok(normalize_deg(tropical - ayanamsa_deg(model, jd_ut)))
}
