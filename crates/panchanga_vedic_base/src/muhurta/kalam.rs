//! Rahu Kalam, Yamaganda and Gulika Kalam: one eighth of the daytime each,
//! chosen per weekday.

use serde::Serialize;

use crate::vaar::Vaar;
use crate::window::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kalam {
    Rahu,
    Yamaganda,
    Gulika,
}

impl Kalam {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahu => "Rahu Kalam",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika Kalam",
        }
    }

    /// 1-based eighth of the day, Sunday first.
    const fn portions(self) -> [u8; 7] {
        match self {
            Self::Rahu => [8, 2, 7, 5, 6, 4, 3],
            Self::Yamaganda => [5, 4, 3, 2, 1, 7, 6],
            Self::Gulika => [7, 6, 5, 4, 3, 2, 1],
        }
    }

    pub const fn portion(self, vaar: Vaar) -> u8 {
        self.portions()[vaar.index() as usize]
    }
}

/// Window of `kalam` within `day` (sunrise to sunset).
pub fn kalam_window(kalam: Kalam, day: TimeWindow, vaar: Vaar) -> TimeWindow {
    day.part(usize::from(kalam.portion(vaar)) - 1, 8)
}

pub fn rahu_kalam(day: TimeWindow, vaar: Vaar) -> TimeWindow {
    kalam_window(Kalam::Rahu, day, vaar)
}

pub fn yamaganda(day: TimeWindow, vaar: Vaar) -> TimeWindow {
    kalam_window(Kalam::Yamaganda, day, vaar)
}

pub fn gulika_kalam(day: TimeWindow, vaar: Vaar) -> TimeWindow {
    kalam_window(Kalam::Gulika, day, vaar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;
    use approx::assert_abs_diff_eq;

    const MINUTE: f64 = 1.0 / 1440.0;

    /// 06:00 to 18:00 in a day fraction.
    fn twelve_hour_day() -> TimeWindow {
        TimeWindow::new(0.25, 0.75).unwrap()
    }

    #[test]
    fn monday_rahu_is_second_eighth() {
        let w = rahu_kalam(twelve_hour_day(), Vaar::Somvaar);
        // 07:30 to 09:00
        assert_abs_diff_eq!(w.start_jd, 0.25 + 90.0 * MINUTE, epsilon = 1e-12);
        assert_abs_diff_eq!(w.end_jd, 0.25 + 180.0 * MINUTE, epsilon = 1e-12);
    }

    #[test]
    fn sunday_rahu_ends_at_sunset() {
        let day = twelve_hour_day();
        assert_eq!(rahu_kalam(day, Vaar::Ravivaar).end_jd, day.end_jd);
    }

    #[test]
    fn kalams_never_coincide() {
        for v in ALL_VAARS {
            let r = Kalam::Rahu.portion(v);
            let y = Kalam::Yamaganda.portion(v);
            let g = Kalam::Gulika.portion(v);
            assert!(r != y && y != g && r != g, "{v:?}");
        }
    }
}
