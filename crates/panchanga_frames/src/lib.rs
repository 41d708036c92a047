//! Reference-frame helpers for the analytic ephemeris.
//!
//! Provides obliquity of the ecliptic, general precession in longitude,
//! a short nutation series, and ecliptic ↔ equatorial / Cartesian ↔
//! spherical conversions. All angles in degrees unless suffixed `_rad`.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use nutation::{Nutation, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use spherical::{
    EclipticCoords, EquatorialCoords, cartesian_to_ecliptic, ecliptic_to_equatorial,
    normalize_deg,
};
