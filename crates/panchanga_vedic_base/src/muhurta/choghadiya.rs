//! Choghadiya: eight slots by day and eight by night.

use serde::Serialize;

use super::Rating;
use crate::vaar::Vaar;
use crate::window::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Choghadiya {
    Udveg,
    Chal,
    Labh,
    Amrit,
    Kaal,
    Rog,
    Shubh,
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Chal => "Chal",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Rog => "Rog",
            Self::Shubh => "Shubh",
        }
    }

    pub const fn rating(self) -> Rating {
        match self {
            Self::Labh | Self::Amrit | Self::Shubh => Rating::Good,
            Self::Chal => Rating::Neutral,
            Self::Udveg | Self::Kaal | Self::Rog => Rating::Bad,
        }
    }
}

use Choghadiya::{Amrit, Chal, Kaal, Labh, Rog, Shubh, Udveg};

/// Daytime sequence per weekday, Sunday first. Each row opens and closes
/// with the weekday lord's quality.
const DAY: [[Choghadiya; 8]; 7] = [
    [Udveg, Chal, Labh, Amrit, Kaal, Rog, Shubh, Udveg],
    [Amrit, Kaal, Rog, Shubh, Udveg, Chal, Labh, Amrit],
    [Rog, Udveg, Chal, Labh, Amrit, Kaal, Shubh, Rog],
    [Labh, Amrit, Kaal, Rog, Shubh, Udveg, Chal, Labh],
    [Shubh, Rog, Udveg, Chal, Labh, Amrit, Kaal, Shubh],
    [Chal, Labh, Amrit, Kaal, Rog, Shubh, Udveg, Chal],
    [Kaal, Shubh, Rog, Udveg, Chal, Labh, Amrit, Kaal],
];

const NIGHT: [[Choghadiya; 8]; 7] = [
    [Shubh, Amrit, Chal, Rog, Kaal, Labh, Udveg, Shubh],
    [Chal, Rog, Kaal, Labh, Udveg, Shubh, Amrit, Chal],
    [Kaal, Labh, Udveg, Shubh, Amrit, Chal, Rog, Kaal],
    [Udveg, Shubh, Amrit, Chal, Rog, Kaal, Labh, Udveg],
    [Amrit, Chal, Rog, Kaal, Labh, Udveg, Shubh, Amrit],
    [Rog, Kaal, Labh, Udveg, Shubh, Amrit, Chal, Rog],
    [Labh, Udveg, Shubh, Amrit, Chal, Rog, Kaal, Labh],
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoghadiyaSlot {
    pub quality: Choghadiya,
    pub rating: Rating,
    pub window: TimeWindow,
}

fn slots(span: TimeWindow, row: &[Choghadiya; 8]) -> Vec<ChoghadiyaSlot> {
    span.split(8)
        .into_iter()
        .zip(row)
        .map(|(window, &quality)| ChoghadiyaSlot {
            quality,
            rating: quality.rating(),
            window,
        })
        .collect()
}

/// Eight slots from sunrise to sunset.
pub fn choghadiya_day(day: TimeWindow, vaar: Vaar) -> Vec<ChoghadiyaSlot> {
    slots(day, &DAY[usize::from(vaar.index())])
}

/// Eight slots from sunset to the next sunrise.
pub fn choghadiya_night(night: TimeWindow, vaar: Vaar) -> Vec<ChoghadiyaSlot> {
    slots(night, &NIGHT[usize::from(vaar.index())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use panchanga_time::UtcTime;

    fn jd(y: i32, m: u32, d: u32, h: u32, min: u32) -> f64 {
        UtcTime::new(y, m, d, h, min, 0.0).to_jd_utc()
    }

    fn qualities(slots: &[ChoghadiyaSlot]) -> Vec<Choghadiya> {
        slots.iter().map(|s| s.quality).collect()
    }

    #[test]
    fn tuesday_june_2026() {
        let sunrise = jd(2026, 6, 16, 5, 42);
        let sunset = jd(2026, 6, 16, 18, 52);
        let next = jd(2026, 6, 17, 5, 42);
        let day = choghadiya_day(TimeWindow::new(sunrise, sunset).unwrap(), Vaar::Mangalvaar);
        let night = choghadiya_night(TimeWindow::new(sunset, next).unwrap(), Vaar::Mangalvaar);
        assert_eq!(
            qualities(&day),
            [Rog, Udveg, Chal, Labh, Amrit, Kaal, Shubh, Rog]
        );
        assert_eq!(
            qualities(&night),
            [Kaal, Labh, Udveg, Shubh, Amrit, Chal, Rog, Kaal]
        );
        assert_eq!(night[0].window.start_jd, day[7].window.end_jd);
    }

    #[test]
    fn monday_new_year_2024() {
        let sunrise = jd(2024, 1, 1, 6, 0);
        let sunset = jd(2024, 1, 1, 18, 0);
        let day = choghadiya_day(TimeWindow::new(sunrise, sunset).unwrap(), Vaar::Somvaar);
        assert_eq!(
            qualities(&day),
            [Amrit, Kaal, Rog, Shubh, Udveg, Chal, Labh, Amrit]
        );
        for slot in &day {
            assert_abs_diff_eq!(slot.window.duration_days() * 1440.0, 90.0, epsilon = 1e-3);
        }
        for w in day.windows(2) {
            assert_eq!(w[1].window.start_jd, w[0].window.end_jd);
        }
        assert_eq!(day[7].window.end_jd, sunset);
    }

    #[test]
    fn ratings() {
        assert_eq!(Amrit.rating(), Rating::Good);
        assert_eq!(Chal.rating(), Rating::Neutral);
        assert_eq!(Kaal.rating(), Rating::Bad);
    }
}
