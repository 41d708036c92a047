//! Vimshottari dasha: the 120-year nakshatra-lord period system.
//!
//! Mahadashas follow the lord of the Moon's birth nakshatra. Every level
//! subdivides its parent proportionally among the same nine lords, starting
//! from the parent's own lord. Up to five levels (Mahadasha through
//! Pranadasha) are supported.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_DEPTH, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_DEPTH,
};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, find_active_period, nakshatra_lord,
    vimshottari_children, vimshottari_hierarchy, vimshottari_level0, vimshottari_snapshot,
    vimshottari_years,
};
