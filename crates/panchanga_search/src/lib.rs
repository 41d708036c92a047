//! Angle event search and panchangam assembly.
//!
//! This crate provides:
//! - A generic ascending-crossing locator over any angular function of time
//! - Element angles and transition lists for tithi, nakshatra, yoga, karana
//!   and the Moon's and Sun's rashis
//! - New/full moon and Sankranti search with Punya Kalam windows
//! - Masa (with Adhika/Kshaya), ayana, ritu and samvat resolution
//! - Vedic-day bounds with a polar fallback, and moonrise/moonset
//! - The nine grahas' sidereal positions
//! - Festival-day assembly for the rule engine
//! - The full panchangam report and the birth chart (kundli) with its
//!   divisional charts
//!
//! All Julian Dates are UTC.

pub mod calendar;
pub mod elements;
pub mod error;
pub mod festivals;
pub mod graha_positions;
pub mod kundli;
pub mod locator;
pub mod lunar_phase;
pub mod panchang;
pub mod panchang_types;
pub mod sankranti;
pub mod transitions;
pub mod vedic_day;

pub use calendar::{AyanaSpan, CalendarInfo, MasaResolver, MasaSpan, ayana_at, calendar_at, masa_at};
pub use elements::{ElementKind, element_angle, elongation_deg};
pub use error::SearchError;
pub use festivals::{DatedFestivals, FestivalSearch};
pub use graha_positions::{GrahaEntry, graha_positions, graha_sidereal_longitude};
pub use kundli::{Bhava, Kundli, KundliConfig, Lagna, VargaChart, VargaPlacement, kundli};
pub use locator::{Crossing, LocatorConfig, Targets, find_crossings, next_crossing, prev_crossing};
pub use lunar_phase::{full_moon_after, full_moon_before, new_moon_after, new_moon_before};
pub use panchang::{muhurtas_for_day, panchangam};
pub use panchang_types::{
    DayTransitions, KaranaInfo, Muhurtas, NakshatraInfo, NakshatraWindows, PanchangConfig,
    PanchangamReport, SankrantiInfo, Span, TithiInfo, VaarInfo, YogaInfo,
};
pub use sankranti::{GHATIKA_DAYS, PunyaKalamConfig, SankrantiEvent, SankrantiSearch, is_solstice};
pub use transitions::{ElementInfo, PanchangaElement, SegmentStatus, element_at, transitions_in};
pub use vedic_day::{
    MoonEvents, VedicDay, moon_events_on, solar_event, validate_location, vedic_day_containing,
    vedic_day_for_date,
};
