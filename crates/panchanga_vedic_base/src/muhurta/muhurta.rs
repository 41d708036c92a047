//! Day and night muhurtas: fifteen equal divisions of each.

use crate::vaar::Vaar;
use crate::window::TimeWindow;

/// Muhurtas in the daytime (and in the night).
pub const DAY_MUHURTAS: usize = 15;

/// The eighth day muhurta, straddling local apparent noon.
pub fn abhijit_muhurta(day: TimeWindow) -> TimeWindow {
    day.part(7, DAY_MUHURTAS)
}

/// The fourteenth muhurta of the preceding night, ending one night-muhurta
/// before sunrise. `night` runs from the previous sunset to sunrise.
pub fn brahma_muhurta(night: TimeWindow) -> TimeWindow {
    night.part(DAY_MUHURTAS - 2, DAY_MUHURTAS)
}

/// Last night-muhurta before sunrise.
pub fn pratah_sandhya(night: TimeWindow) -> TimeWindow {
    night.part(DAY_MUHURTAS - 1, DAY_MUHURTAS)
}

/// Sixth eighth of the daytime, in the afternoon.
pub fn govardhan_muhurta(day: TimeWindow) -> TimeWindow {
    day.part(5, 8)
}

/// `(part, is_night)` per weekday, 1-based muhurta numbers, Sunday first.
const DUR_MUHURTA: [&[(u8, bool)]; 7] = [
    &[(14, false)],
    &[(9, false), (12, false)],
    &[(4, false), (7, true)],
    &[(8, false)],
    &[(6, false), (12, false)],
    &[(4, false), (9, false)],
    &[(1, false), (2, false)],
];

/// Dur Muhurta windows for the Vedic day. Night entries are skipped
/// when `night` (sunset to next sunrise) is unavailable.
pub fn dur_muhurtas(day: TimeWindow, night: Option<TimeWindow>, vaar: Vaar) -> Vec<TimeWindow> {
    DUR_MUHURTA[usize::from(vaar.index())]
        .iter()
        .filter_map(|&(part, is_night)| {
            let span = if is_night { night? } else { day };
            Some(span.part(usize::from(part) - 1, DAY_MUHURTAS))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MINUTE: f64 = 1.0 / 1440.0;

    #[test]
    fn govardhan_is_sixth_eighth() {
        let g = govardhan_muhurta(TimeWindow::new(0.25, 0.75).unwrap());
        // 13:30 to 15:00
        assert_abs_diff_eq!(g.start_jd, 0.25 + 450.0 * MINUTE, epsilon = 1e-12);
        assert_abs_diff_eq!(g.end_jd, 0.25 + 540.0 * MINUTE, epsilon = 1e-12);
    }

    #[test]
    fn abhijit_centred_on_midday() {
        let day = TimeWindow::new(0.25, 0.75).unwrap();
        let a = abhijit_muhurta(day);
        assert_abs_diff_eq!((a.start_jd + a.end_jd) / 2.0, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a.duration_days(), 48.0 * MINUTE, epsilon = 1e-12);
    }

    #[test]
    fn brahma_scales_with_night() {
        // 12 h night: 48-minute muhurtas, Brahma 96..48 minutes before sunrise.
        let night = TimeWindow::new(-0.25, 0.25).unwrap();
        let b = brahma_muhurta(night);
        assert_abs_diff_eq!(b.start_jd, 0.25 - 96.0 * MINUTE, epsilon = 1e-12);
        assert_abs_diff_eq!(b.end_jd, 0.25 - 48.0 * MINUTE, epsilon = 1e-12);

        // 14 h night stretches the window.
        let long_night = TimeWindow::new(0.25 - 14.0 / 24.0, 0.25).unwrap();
        assert!(brahma_muhurta(long_night).duration_days() > b.duration_days());
    }

    #[test]
    fn tuesday_dur_muhurta_reaches_into_night() {
        let day = TimeWindow::new(0.25, 0.75).unwrap();
        let night = TimeWindow::new(0.75, 1.25).unwrap();
        let d = dur_muhurtas(day, Some(night), Vaar::Mangalvaar);
        assert_eq!(d.len(), 2);
        assert!(night.contains(d[1].start_jd));
        assert_eq!(dur_muhurtas(day, None, Vaar::Mangalvaar).len(), 1);
    }
}
