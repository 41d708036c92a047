//! Hora: planetary hours, 12 by day and 12 by night.

use serde::Serialize;

use crate::graha::Graha;
use crate::vaar::Vaar;
use crate::window::TimeWindow;

/// Descending orbital-period order; each hora's lord is the next in line.
pub const HORA_SEQUENCE: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hora {
    /// 0..=23 counted from sunrise.
    pub number: u8,
    pub lord: Graha,
    pub is_day: bool,
    pub window: TimeWindow,
}

fn sequence_position(graha: Graha) -> usize {
    HORA_SEQUENCE.iter().position(|&g| g == graha).unwrap_or(0)
}

/// Lord of hora `number` (0-based from sunrise) on `vaar`.
pub fn hora_lord(vaar: Vaar, number: u8) -> Graha {
    let start = sequence_position(vaar.lord());
    HORA_SEQUENCE[(start + usize::from(number)) % 7]
}

/// All 24 horas: day from sunrise to sunset, night from sunset to the next
/// sunrise, each split into 12 equal parts.
pub fn horas(day: TimeWindow, night: TimeWindow, vaar: Vaar) -> Vec<Hora> {
    let day_parts = day.split(12).into_iter().map(|w| (w, true));
    let night_parts = night.split(12).into_iter().map(|w| (w, false));
    day_parts
        .chain(night_parts)
        .enumerate()
        .map(|(i, (window, is_day))| {
            let number = i as u8;
            Hora {
                number,
                lord: hora_lord(vaar, number),
                is_day,
                window,
            }
        })
        .collect()
}
