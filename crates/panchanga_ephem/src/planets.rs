//! Geocentric planetary longitudes from Keplerian mean elements.
//!
//! Elements and rates are the JPL approximate elements valid 1800–2050
//! (Standish, "Keplerian Elements for Approximate Positions of the Major
//! Planets", Table 1). Heliocentric J2000 ecliptic positions are differenced
//! against the Earth–Moon barycentre, corrected one step for light time, and
//! carried to the equinox of date by general precession. Errors stay within
//! a few arcminutes, which only matters for sign-boundary cases.

use panchanga_frames::{EclipticCoords, cartesian_to_ecliptic};

use crate::body::Body;
use crate::error::EphemError;

/// Light travel time for 1 AU, days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

const KEPLER_MAX_ITERATIONS: usize = 30;
const KEPLER_TOLERANCE_RAD: f64 = 1e-12;

/// Mean elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    incl: (f64, f64),
    mean_lon: (f64, f64),
    lon_peri: (f64, f64),
    node: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    incl: (7.004_979_02, -0.005_947_49),
    mean_lon: (252.250_323_50, 149_472.674_111_75),
    lon_peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    incl: (3.394_676_05, -0.000_788_90),
    mean_lon: (181.979_099_50, 58_517.815_387_29),
    lon_peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARY: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    incl: (-0.000_015_31, -0.012_946_68),
    mean_lon: (100.464_571_66, 35_999.372_449_81),
    lon_peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    incl: (1.849_691_42, -0.008_131_31),
    mean_lon: (-4.553_432_05, 19_140.302_684_99),
    lon_peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    incl: (1.304_396_95, -0.001_837_14),
    mean_lon: (34.396_440_51, 3_034.746_127_75),
    lon_peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    incl: (2.485_991_87, 0.001_936_09),
    mean_lon: (49.954_244_23, 1_222.493_622_01),
    lon_peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

fn elements_for(body: Body) -> Result<&'static Elements, EphemError> {
    match body {
        Body::Mercury => Ok(&MERCURY),
        Body::Venus => Ok(&VENUS),
        Body::Mars => Ok(&MARS),
        Body::Jupiter => Ok(&JUPITER),
        Body::Saturn => Ok(&SATURN),
        other => Err(EphemError::UnsupportedBody(other)),
    }
}

/// Solve E − e·sin E = M by Newton iteration.
fn solve_kepler(mean_anomaly_rad: f64, e: f64, body: Body) -> Result<f64, EphemError> {
    let mut ecc_anomaly = mean_anomaly_rad + e * mean_anomaly_rad.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (mean_anomaly_rad - (ecc_anomaly - e * ecc_anomaly.sin()))
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(ecc_anomaly);
        }
    }
    Err(EphemError::KeplerNoConvergence(body))
}

/// Heliocentric J2000 ecliptic Cartesian position in AU.
fn heliocentric(el: &Elements, t: f64, body: Body) -> Result<[f64; 3], EphemError> {
    let at = |(v0, rate): (f64, f64)| v0 + rate * t;
    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.incl).to_radians();
    let mean_lon = at(el.mean_lon);
    let lon_peri = at(el.lon_peri);
    let node = at(el.node);

    let omega = (lon_peri - node).to_radians();
    let node = node.to_radians();
    let mut mean_anomaly = (mean_lon - lon_peri).rem_euclid(360.0);
    if mean_anomaly > 180.0 {
        mean_anomaly -= 360.0;
    }
    let ecc_anomaly = solve_kepler(mean_anomaly.to_radians(), e, body)?;

    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    Ok([
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ])
}

fn geocentric_at(el: &Elements, t: f64, earth: &[f64; 3], body: Body) -> Result<[f64; 3], EphemError> {
    let p = heliocentric(el, t, body)?;
    Ok([p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]])
}

/// Geocentric ecliptic position, J2000 equinox, for `t` centuries (TT).
pub fn geocentric_j2000(body: Body, t: f64) -> Result<EclipticCoords, EphemError> {
    let el = elements_for(body)?;
    let earth = heliocentric(&EARTH_MOON_BARY, t, body)?;
    let first = cartesian_to_ecliptic(&geocentric_at(el, t, &earth, body)?);
    let tau_centuries = LIGHT_TIME_DAYS_PER_AU * first.distance_au / 36_525.0;
    Ok(cartesian_to_ecliptic(&geocentric_at(
        el,
        t - tau_centuries,
        &earth,
        body,
    )?))
}

/// Geocentric Sun from the same element set, for cross-checking.
#[cfg(test)]
fn sun_from_elements(t: f64) -> EclipticCoords {
    let earth = heliocentric(&EARTH_MOON_BARY, t, Body::Sun).unwrap();
    cartesian_to_ecliptic(&[-earth[0], -earth[1], -earth[2]])
}
