//! Ephemeris gateway for the panchanga engine.
//!
//! The calendar layers ask an ephemeris where a body is along the ecliptic,
//! how fast it moves, and when the Sun and Moon cross the horizon.
//! [`EphemerisGateway`] answers the first two. [`compute_rise_set`] and
//! [`lunar_event_within`] answer the last on top of any gateway.
//!
//! [`AnalyticEphemeris`] is the built-in gateway: Meeus solar and lunar
//! theories plus Keplerian mean elements for the five visible planets.
//! It needs no data files.

pub mod analytic;
pub mod ayanamsa;
pub mod body;
pub mod error;
pub mod gateway;
pub mod lagna;
pub mod moon;
pub mod node;
pub mod planets;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use ayanamsa::{AyanamsaModel, ayanamsa_deg, mean_ayanamsa_deg};
pub use body::Body;
pub use error::EphemError;
pub use gateway::{EphemerisGateway, MoonEquatorial, SunEquatorial, sidereal_longitude};
pub use lagna::lagna_longitude_deg;
pub use riseset::{approximate_local_noon_jd, compute_rise_set, lunar_event_within};
pub use riseset_types::{GeoLocation, LunarEvent, RiseSetConfig, RiseSetEvent, RiseSetResult};
