//! Panchanga tables and pure calendar arithmetic.
//!
//! Nothing here touches an ephemeris. Every function maps already-known
//! angles, instants or day bounds to calendar units:
//! - the five limbs (tithi, vaar, nakshatra, yoga, karana) and their
//!   sector arithmetic
//! - masa, ritu, ayana and samvat bookkeeping, including Adhika and
//!   Kshaya months
//! - muhurta partitions of the day and night, hora, Panchak and special
//!   yogas
//! - the Vimshottari dasha tree, divisional charts and Ashtakoot matching
//! - Tarabalam, Chandrabalam, Chandrashtama and Disha Shoola
//! - the festival rule registry and its evaluator

pub mod ashtakoot;
pub mod balam;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod festival;
pub mod graha;
pub mod hora;
pub mod karana;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod panchak;
pub mod rashi;
pub mod ritu;
pub mod samvatsara;
pub mod shoola;
pub mod special_yoga;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod varga;
pub mod window;
pub mod yoga;

pub use ashtakoot::{
    AshtakootScore, Koota, KootaScore, MangalDosha, MangalReference, MatchVerdict, MoonChart,
    ashtakoot, mangal_dosha, manglik_compatible,
};
pub use balam::{
    Chandrabalam, Chandrashtama, PersonalBalam, Tara, Tarabalam, auspicious_nakshatras,
    chandrabalam, chandrashtama, chandrashtama_rashi, personal_balam, tarabalam,
};
pub use dasha::{
    DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, vimshottari_hierarchy,
    vimshottari_snapshot,
};
pub use dignity::{Dignity, dignity_in};
pub use error::VedicError;
pub use festival::{
    AdhikaPolicy, Festival, FestivalCategory, FestivalDay, FestivalOutcome, FestivalResolution,
    FestivalRule, MomentElements, Prevailing, ResolutionReason, RuleName, SankrantiDay, Trigger,
    default_rules, ekadashi_name, evaluate_festivals, rule_by_id, sankranti_name,
};
pub use graha::{ALL_GRAHAS, Graha, Maitri, SAPTA_GRAHAS, naisargika_maitri};
pub use hora::{Hora, hora_lord, horas};
pub use karana::{Karana, KaranaPosition, karana_from_elongation};
pub use masa::{Masa, MasaConvention, MasaInfo, apply_convention, classify_masa, masa_from_rashi};
pub use muhurta::Rating;
pub use nakshatra::{Nakshatra, NakshatraPosition, nakshatra_from_longitude};
pub use panchak::{PanchakKind, PanchakStatus, panchak_status};
pub use rashi::{Rashi, RashiPosition, rashi_from_longitude};
pub use ritu::{Ayana, Ritu, ayana_from_sun_longitude, ritu_from_sun_rashi};
pub use samvatsara::{SamvatInfo, Samvatsara, samvat_for};
pub use shoola::{Direction, DishaShoola, disha_shoola, is_direction_safe};
pub use special_yoga::{SpecialYoga, special_yogas};
pub use tithi::{Paksha, Tithi, TithiPosition, tithi_from_elongation};
pub use vaar::Vaar;
pub use varga::{ALL_VARGAS, Varga};
pub use window::TimeWindow;
pub use yoga::{Yoga, YogaPosition, yoga_from_sum};
