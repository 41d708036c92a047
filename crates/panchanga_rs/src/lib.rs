//! Convenience facade for the panchanga engine.
//!
//! Wraps the built-in analytic ephemeris, a validated [`Config`] and the
//! default festival registry behind a handful of functions that take UTC
//! instants and an observer directly.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use panchanga_rs::*;
//!
//! let instant: UtcTime = "2026-02-15T12:30:00Z".parse().unwrap();
//! let delhi = GeoLocation::new(28.6139, 77.2090, 0.0);
//! let options = Options {
//!     timezone_offset_minutes: Some(330),
//!     ..Options::default()
//! };
//! let report = compute(&instant, &delhi, &options).unwrap();
//! println!("{} ({:?})", report.tithi.name, report.tithi.paksha);
//! for f in &report.festivals {
//!     println!("{}", f.name);
//! }
//! ```
//!
//! A shared [`Panchanga`] handle avoids re-validating a custom [`Config`]
//! on every call:
//!
//! ```rust,no_run
//! use panchanga_rs::*;
//!
//! let config = Config::from_toml_str("ayanamsa = \"raman\"").unwrap();
//! let engine = Panchanga::new(config).unwrap();
//! let birth = UtcTime::new(1990, 7, 15, 4, 30, 0.0);
//! let chart = engine.compute_kundli(&birth, &GeoLocation::new(19.076, 72.8777, 0.0)).unwrap();
//! println!("lagna {}", chart.lagna.rashi.name());
//! ```

pub mod config;
pub mod convenience;
pub mod engine;
pub mod error;

pub use config::{Config, Options, SankrantiSettings};
pub use convenience::{
    MatchResult, compute, compute_kundli, match_kundli, personal_balam, sunrise, sunset,
    unambiguous_festivals,
};
pub use engine::{ChoghadiyaDay, MAX_FESTIVAL_RANGE_DAYS, Panchanga};
pub use error::PanchangaError;

pub use panchanga_ephem::{AnalyticEphemeris, AyanamsaModel, EphemerisGateway, GeoLocation};
pub use panchanga_time::UtcTime;

pub use panchanga_search::{
    CalendarInfo, DatedFestivals, GrahaEntry, Kundli, Lagna, MoonEvents, Muhurtas,
    PanchangaElement, PanchangamReport, SankrantiEvent, SegmentStatus, VargaChart, VedicDay,
};
pub use panchanga_vedic_base::{
    Direction, DishaShoola, Festival, FestivalResolution, Graha, Karana, KootaScore, MangalDosha,
    MangalReference, Masa, MasaConvention, MatchVerdict, Nakshatra, Paksha, PersonalBalam, Rashi,
    ResolutionReason, Tara, Tithi, Vaar, Varga, Yoga,
};
