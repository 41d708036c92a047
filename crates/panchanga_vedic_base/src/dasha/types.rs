//! Core dasha types.

use serde::Serialize;

use crate::graha::Graha;

/// Year length used for all dasha arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest level supported (1 = Mahadasha only, 5 = down to Pranadasha).
pub const MAX_DASHA_DEPTH: u8 = 5;

/// Mahadasha, Antardasha and Pratyantardasha.
pub const DEFAULT_DASHA_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into the parent level's array (0 for Mahadashas).
    pub parent_idx: u32,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Complete tree, flattened per level.
#[derive(Debug, Clone, Serialize)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    /// Days of the first Mahadasha still to run at birth.
    pub balance_days: f64,
    /// `levels[0]` holds Mahadashas, `levels[1]` Antardashas, and so on.
    pub levels: Vec<Vec<DashaPeriod>>,
}

impl DashaHierarchy {
    /// Children of `levels[depth][idx]`, in rotation order.
    pub fn children_of(&self, depth: usize, idx: usize) -> impl Iterator<Item = &DashaPeriod> {
        self.levels
            .get(depth + 1)
            .into_iter()
            .flatten()
            .filter(move |p| p.parent_idx as usize == idx)
    }
}

/// Active chain at one instant, Mahadasha first.
#[derive(Debug, Clone, Serialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dasha_level_from_u8() {
        assert_eq!(DashaLevel::from_u8(0), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::from_u8(4), Some(DashaLevel::Pranadasha));
        assert_eq!(DashaLevel::from_u8(5), None);
    }

    #[test]
    fn dasha_level_child() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Pranadasha.child_level(), None);
    }
}
