//! Built-in gateway backed by closed-form theories.

use panchanga_frames::{
    ecliptic_to_equatorial, general_precession_longitude_deg, normalize_deg, nutation,
    true_obliquity_deg,
};
use panchanga_time::{jd_ut_to_tt, julian_centuries};

use crate::body::Body;
use crate::error::EphemError;
use crate::gateway::{EphemerisGateway, MoonEquatorial, SunEquatorial};
use crate::{moon, node, planets, sun};

/// Analytic ephemeris: Meeus Sun and Moon, Keplerian planets, mean node.
///
/// Stateless and cheap to construct; every query is a pure function of
/// the Julian Date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

fn centuries_tt(jd_ut: f64) -> Result<f64, EphemError> {
    if !jd_ut.is_finite() {
        return Err(EphemError::NonFinite("jd_ut"));
    }
    Ok(julian_centuries(jd_ut_to_tt(jd_ut)))
}

impl EphemerisGateway for AnalyticEphemeris {
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemError> {
        let t = centuries_tt(jd_ut)?;
        let nut = nutation(t);
        let lon = match body {
            Body::Sun => return Ok(sun::apparent_longitude_deg(&sun::solar_position(t), &nut)),
            Body::Moon => moon::moon_longitude_deg(t),
            Body::MeanNode => node::mean_node_deg(t),
            planet => {
                planets::geocentric_j2000(planet, t)?.lon_deg + general_precession_longitude_deg(t)
            }
        };
        Ok(normalize_deg(lon + nut.longitude_deg))
    }

    fn sun_equatorial(&self, jd_ut: f64) -> Result<SunEquatorial, EphemError> {
        let t = centuries_tt(jd_ut)?;
        let nut = nutation(t);
        let pos = sun::solar_position(t);
        let lon = sun::apparent_longitude_deg(&pos, &nut);
        let eq = ecliptic_to_equatorial(lon, 0.0, true_obliquity_deg(t, &nut));
        Ok(SunEquatorial {
            ra_deg: eq.ra_deg,
            dec_deg: eq.dec_deg,
            distance_au: pos.distance_au,
        })
    }

    fn moon_equatorial(&self, jd_ut: f64) -> Result<MoonEquatorial, EphemError> {
        let t = centuries_tt(jd_ut)?;
        let nut = nutation(t);
        let lon = normalize_deg(moon::moon_longitude_deg(t) + nut.longitude_deg);
        let eq = ecliptic_to_equatorial(lon, moon::moon_latitude_deg(t), true_obliquity_deg(t, &nut));
        let distance_km = moon::moon_distance_km(t);
        Ok(MoonEquatorial {
            ra_deg: eq.ra_deg,
            dec_deg: eq.dec_deg,
            distance_km,
            parallax_deg: moon::horizontal_parallax_deg(distance_km),
        })
    }

    fn true_obliquity_deg(&self, jd_ut: f64) -> Result<f64, EphemError> {
        let t = centuries_tt(jd_ut)?;
        Ok(true_obliquity_deg(t, &nutation(t)))
    }
}
