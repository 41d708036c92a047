//! Amrit Kalam and Varjyam: windows placed at fixed ghati offsets inside
//! the current nakshatra, scaled to its actual duration.
//!
//! A nakshatra is treated as 60 ghatis long whatever its clock duration;
//! each window lasts four of those ghatis.

use crate::nakshatra::Nakshatra;
use crate::window::TimeWindow;

const NAKSHATRA_GHATIS: f64 = 60.0;
const WINDOW_GHATIS: f64 = 4.0;

/// Starting ghati of Amrit Kalam per nakshatra, Ashwini first.
const AMRIT_KALAM_GHATI: [u8; 27] = [
    42, 48, 54, 52, 38, 35, 54, 44, 56, 54, 44, 42, 45, 44, 38, 38, 34, 38, 44, 48, 44, 34, 34, 42,
    40, 48, 54,
];

/// Starting ghati(s) of Varjyam per nakshatra. Mula has two.
const VARJYAM_GHATI: [&[u8]; 27] = [
    &[50],
    &[24],
    &[30],
    &[40],
    &[14],
    &[21],
    &[30],
    &[20],
    &[32],
    &[30],
    &[20],
    &[18],
    &[21],
    &[20],
    &[14],
    &[14],
    &[10],
    &[14],
    &[20, 56],
    &[24],
    &[20],
    &[10],
    &[10],
    &[18],
    &[16],
    &[24],
    &[30],
];

fn ghati_window(span: TimeWindow, ghati: u8) -> TimeWindow {
    let from = f64::from(ghati) / NAKSHATRA_GHATIS;
    span.fraction(from, from + WINDOW_GHATIS / NAKSHATRA_GHATIS)
}

/// `span` is the nakshatra's full start-to-end window.
pub fn amrit_kalam(nakshatra: Nakshatra, span: TimeWindow) -> TimeWindow {
    ghati_window(span, AMRIT_KALAM_GHATI[usize::from(nakshatra.index())])
}

pub fn varjyam(nakshatra: Nakshatra, span: TimeWindow) -> Vec<TimeWindow> {
    VARJYAM_GHATI[usize::from(nakshatra.index())]
        .iter()
        .map(|&g| ghati_window(span, g))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn windows_stay_inside_nakshatra() {
        let span = TimeWindow::new(10.0, 11.0).unwrap();
        for n in crate::nakshatra::ALL_NAKSHATRAS {
            let a = amrit_kalam(n, span);
            assert!(a.start_jd >= span.start_jd && a.end_jd <= span.end_jd, "{n:?}");
            for v in varjyam(n, span) {
                assert!(v.start_jd >= span.start_jd && v.end_jd <= span.end_jd, "{n:?}");
            }
        }
    }

    #[test]
    fn scaled_to_nakshatra_length() {
        // Ashwini Varjyam at ghati 50 of a 1.2-day nakshatra.
        let span = TimeWindow::new(0.0, 1.2).unwrap();
        let v = varjyam(Nakshatra::Ashwini, span);
        assert_eq!(v.len(), 1);
        assert_abs_diff_eq!(v[0].start_jd, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[0].duration_days(), 0.08, epsilon = 1e-12);
    }

    #[test]
    fn mula_has_two_varjyams() {
        let span = TimeWindow::new(0.0, 1.0).unwrap();
        assert_eq!(varjyam(Nakshatra::Mula, span).len(), 2);
    }
}
