//! New and full moon search.

use panchanga_ephem::EphemerisGateway;

use crate::elements::elongation_deg;
use crate::error::SearchError;
use crate::locator::{LocatorConfig, Targets, next_crossing, prev_crossing};

/// Longest synodic month plus margin, days.
const LUNATION_HORIZON_DAYS: f64 = 32.0;

fn phase_before<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    phase_deg: f64,
    config: &LocatorConfig,
) -> Result<Option<f64>, SearchError> {
    let f = |t: f64| elongation_deg(gateway, t);
    Ok(prev_crossing(&f, jd_ut, LUNATION_HORIZON_DAYS, Targets::Explicit(&[phase_deg]), config)?.map(|c| c.jd))
}

fn phase_after<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    phase_deg: f64,
    config: &LocatorConfig,
) -> Result<Option<f64>, SearchError> {
    let f = |t: f64| elongation_deg(gateway, t);
    Ok(next_crossing(&f, jd_ut, LUNATION_HORIZON_DAYS, Targets::Explicit(&[phase_deg]), config)?.map(|c| c.jd))
}

/// Most recent new moon at or before `jd_ut`.
pub fn new_moon_before<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    config: &LocatorConfig,
) -> Result<Option<f64>, SearchError> {
    phase_before(gateway, jd_ut, 0.0, config)
}

/// First new moon after `jd_ut`.
pub fn new_moon_after<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    config: &LocatorConfig,
) -> Result<Option<f64>, SearchError> {
    phase_after(gateway, jd_ut, 0.0, config)
}

pub fn full_moon_before<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    config: &LocatorConfig,
) -> Result<Option<f64>, SearchError> {
    phase_before(gateway, jd_ut, 180.0, config)
}

pub fn full_moon_after<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    jd_ut: f64,
    config: &LocatorConfig,
) -> Result<Option<f64>, SearchError> {
    phase_after(gateway, jd_ut, 180.0, config)
}
