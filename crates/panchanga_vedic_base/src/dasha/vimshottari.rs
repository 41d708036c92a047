//! Vimshottari engine: level-0 generation, children, full hierarchy and
//! snapshot descent.

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::balance::birth_balance;
use super::subperiod::proportional_children;
use super::types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH,
};

/// Lords in rotation order with their years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Lord of a nakshatra: the nine-lord cycle repeated three times from Ashwini.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra.index() % 9) as usize].0
}

pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(g, _)| *g == graha)
        .map_or(0.0, |&(_, y)| y)
}

fn rotation_from(graha: Graha) -> impl Iterator<Item = (Graha, f64)> {
    let start = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == graha)
        .unwrap_or(0);
    (0..9).map(move |i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

/// The nine Mahadashas of one cycle.
///
/// The first period starts before birth by the elapsed portion, so every
/// Mahadasha carries its full length and subdivides on its true dates.
/// Returns the periods and the balance remaining at birth.
pub fn vimshottari_level0(birth_jd: f64, moon_sidereal_lon: f64) -> (Vec<DashaPeriod>, f64) {
    let lord = nakshatra_lord(nakshatra_from_longitude(moon_sidereal_lon).nakshatra);
    let entry_days = vimshottari_years(lord) * DAYS_PER_YEAR;
    let balance = birth_balance(moon_sidereal_lon, entry_days);

    let mut cursor = birth_jd - (entry_days - balance.balance_days);
    let periods = rotation_from(lord)
        .enumerate()
        .map(|(i, (graha, years))| {
            let start = cursor;
            cursor += years * DAYS_PER_YEAR;
            DashaPeriod {
                graha,
                start_jd: start,
                end_jd: cursor,
                level: DashaLevel::Mahadasha,
                order: (i as u16) + 1,
                parent_idx: 0,
            }
        })
        .collect();
    (periods, balance.balance_days)
}

/// All nine children of `parent`, starting from the parent's own lord.
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let seq: Vec<(Graha, f64)> = rotation_from(parent.graha).collect();
    proportional_children(parent, &seq, VIMSHOTTARI_TOTAL_YEARS, child_level, parent_idx)
}

/// Full tree down to `depth` levels (1..=5).
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    depth: u8,
) -> Result<DashaHierarchy, VedicError> {
    if !(1..=MAX_DASHA_DEPTH).contains(&depth) {
        return Err(VedicError::InvalidDashaDepth(depth));
    }
    if !birth_jd.is_finite() || !moon_sidereal_lon.is_finite() {
        return Err(VedicError::NonFinite("dasha birth input"));
    }

    let (level0, balance_days) = vimshottari_level0(birth_jd, moon_sidereal_lon);
    let mut levels = vec![level0];
    for _ in 1..depth {
        let next: Vec<DashaPeriod> = levels
            .last()
            .into_iter()
            .flatten()
            .enumerate()
            .flat_map(|(pidx, parent)| vimshottari_children(parent, pidx as u32))
            .collect();
        levels.push(next);
    }

    Ok(DashaHierarchy {
        birth_jd,
        balance_days,
        levels,
    })
}

/// Index of the period containing `jd` in a sorted, contiguous slice.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Active chain at `query_jd` without materialising the full tree.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    depth: u8,
) -> DashaSnapshot {
    let depth = depth.clamp(1, MAX_DASHA_DEPTH);
    let (mut siblings, _) = vimshottari_level0(birth_jd, moon_sidereal_lon);
    let mut periods = Vec::with_capacity(usize::from(depth));

    while let Some(idx) = find_active_period(&siblings, query_jd) {
        let active = siblings[idx];
        periods.push(active);
        if periods.len() == usize::from(depth) {
            break;
        }
        siblings = vimshottari_children(&active, idx as u32);
    }

    DashaSnapshot { query_jd, periods }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn years_sum_to_cycle() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|&(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn lords_repeat_every_nine() {
        assert_eq!(nakshatra_lord(Nakshatra::Ashwini), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Magha), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Mula), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Rohini), Graha::Chandra);
        assert_eq!(nakshatra_lord(Nakshatra::Revati), Graha::Buddh);
    }

    #[test]
    fn ashwini_start_gives_full_ketu() {
        let (periods, balance) = vimshottari_level0(BIRTH, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].graha, Graha::Ketu);
        assert_eq!(periods[0].start_jd, BIRTH);
        assert_relative_eq!(balance, 7.0 * DAYS_PER_YEAR, epsilon = 1e-9);
        let total = periods[8].end_jd - periods[0].start_jd;
        assert_relative_eq!(total, 120.0 * DAYS_PER_YEAR, epsilon = 1e-6);
    }

    #[test]
    fn mid_rohini_starts_half_elapsed_moon() {
        // Rohini spans 40°..53°20′; Moon mahadasha is 10 years.
        let lon = 40.0 + crate::nakshatra::NAKSHATRA_SPAN / 2.0;
        let (periods, balance) = vimshottari_level0(BIRTH, lon);
        assert_eq!(periods[0].graha, Graha::Chandra);
        assert_relative_eq!(balance, 5.0 * DAYS_PER_YEAR, epsilon = 1e-6);
        assert_relative_eq!(periods[0].end_jd - BIRTH, balance, epsilon = 1e-6);
        assert_eq!(periods[1].graha, Graha::Mangal);
    }

    #[test]
    fn moon_on_rohini_cusp_gives_full_moon_period() {
        let h = vimshottari_hierarchy(BIRTH, 40.0, 1).unwrap();
        assert_eq!(h.levels[0][0].graha, Graha::Chandra);
        assert_relative_eq!(h.balance_days, 10.0 * DAYS_PER_YEAR, epsilon = 1e-6);
    }

    #[test]
    fn hierarchy_rejects_bad_depth() {
        assert!(vimshottari_hierarchy(BIRTH, 10.0, 0).is_err());
        assert!(vimshottari_hierarchy(BIRTH, 10.0, 6).is_err());
    }

    #[test]
    fn hierarchy_level_sizes() {
        let h = vimshottari_hierarchy(BIRTH, 123.4, 3).unwrap();
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[0].len(), 9);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
    }

    #[test]
    fn antardasha_starts_with_parent_lord() {
        let h = vimshottari_hierarchy(BIRTH, 123.4, 2).unwrap();
        for (idx, md) in h.levels[0].iter().enumerate() {
            let first = h.children_of(0, idx).next().unwrap();
            assert_eq!(first.graha, md.graha);
        }
    }

    #[test]
    fn snapshot_matches_hierarchy() {
        let query = BIRTH + 12_345.6;
        let snap = vimshottari_snapshot(BIRTH, 200.0, query, 3);
        let h = vimshottari_hierarchy(BIRTH, 200.0, 3).unwrap();
        assert_eq!(snap.periods.len(), 3);
        for (depth, active) in snap.periods.iter().enumerate() {
            let idx = find_active_period(&h.levels[depth], query).unwrap();
            assert_eq!(h.levels[depth][idx].graha, active.graha);
            assert_relative_eq!(h.levels[depth][idx].start_jd, active.start_jd, epsilon = 1e-6);
        }
    }

    #[test]
    fn snapshot_outside_cycle_is_empty() {
        let snap = vimshottari_snapshot(BIRTH, 0.0, BIRTH + 200.0 * DAYS_PER_YEAR, 3);
        assert!(snap.periods.is_empty());
    }

    proptest! {
        #[test]
        fn children_partition_parent(lon in 0.0f64..360.0) {
            let h = vimshottari_hierarchy(BIRTH, lon, 3).unwrap();
            for depth in 0..2 {
                for (idx, parent) in h.levels[depth].iter().enumerate() {
                    let kids: Vec<_> = h.children_of(depth, idx).collect();
                    prop_assert_eq!(kids.len(), 9);
                    prop_assert_eq!(kids[0].start_jd, parent.start_jd);
                    prop_assert_eq!(kids[8].end_jd, parent.end_jd);
                    for w in kids.windows(2) {
                        prop_assert_eq!(w[0].end_jd, w[1].start_jd);
                    }
                    let sum: f64 = kids.iter().map(|k| k.duration_days()).sum();
                    prop_assert!((sum - parent.duration_days()).abs() < 1e-6);
                }
            }
        }
    }
}
