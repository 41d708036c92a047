//! Proportional sub-period generation.
//!
//! child duration = (child_years / cycle_years) * parent duration

use crate::graha::Graha;

use super::types::{DashaLevel, DashaPeriod};

/// Snap the last child's end_jd to the parent's to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Children of `parent` for an ordered `(graha, years)` sequence.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    cycle_years: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(graha, years)) in sequence.iter().enumerate() {
        let end = cursor + (years / cycle_years) * parent_duration;
        children.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (order_0 as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}
