//! Gowri Panchangam (Nalla Neram): the South Indian eight-part system.

use serde::Serialize;

use super::Rating;
use crate::vaar::Vaar;
use crate::window::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gowri {
    Udyoga,
    Shubha,
    Roga,
    Laabha,
    Dhana,
    Visha,
    Amrita,
    Shunya,
}

impl Gowri {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udyoga => "Udyoga",
            Self::Shubha => "Shubha",
            Self::Roga => "Roga",
            Self::Laabha => "Laabha",
            Self::Dhana => "Dhana",
            Self::Visha => "Visha",
            Self::Amrita => "Amrita",
            Self::Shunya => "Shunya",
        }
    }

    pub const fn rating(self) -> Rating {
        match self {
            Self::Roga | Self::Visha | Self::Shunya => Rating::Bad,
            _ => Rating::Good,
        }
    }
}

use Gowri::{Amrita, Dhana, Laabha, Roga, Shubha, Shunya, Udyoga, Visha};

const DAY: [[Gowri; 8]; 7] = [
    [Udyoga, Shubha, Roga, Laabha, Dhana, Visha, Amrita, Shunya],
    [Amrita, Shunya, Udyoga, Shubha, Roga, Laabha, Dhana, Visha],
    [Roga, Laabha, Dhana, Visha, Amrita, Shunya, Udyoga, Shubha],
    [Laabha, Dhana, Visha, Amrita, Shunya, Udyoga, Shubha, Roga],
    [Dhana, Visha, Amrita, Shunya, Udyoga, Shubha, Roga, Laabha],
    [Visha, Amrita, Shunya, Udyoga, Shubha, Roga, Laabha, Dhana],
    [Shunya, Udyoga, Visha, Amrita, Roga, Laabha, Dhana, Shubha],
];

const NIGHT: [[Gowri; 8]; 7] = [
    [Shubha, Amrita, Shunya, Roga, Visha, Dhana, Udyoga, Laabha],
    [Udyoga, Laabha, Shubha, Amrita, Shunya, Roga, Visha, Dhana],
    [Dhana, Udyoga, Laabha, Shubha, Amrita, Shunya, Roga, Visha],
    [Visha, Dhana, Udyoga, Laabha, Shubha, Amrita, Shunya, Roga],
    [Roga, Visha, Dhana, Udyoga, Laabha, Shubha, Amrita, Shunya],
    [Shunya, Roga, Visha, Dhana, Udyoga, Laabha, Shubha, Amrita],
    [Laabha, Dhana, Shubha, Shunya, Udyoga, Visha, Amrita, Roga],
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GowriSlot {
    pub quality: Gowri,
    pub rating: Rating,
    pub window: TimeWindow,
}

fn slots(span: TimeWindow, row: &[Gowri; 8]) -> Vec<GowriSlot> {
    span.split(8)
        .into_iter()
        .zip(row)
        .map(|(window, &quality)| GowriSlot {
            quality,
            rating: quality.rating(),
            window,
        })
        .collect()
}

pub fn gowri_day(day: TimeWindow, vaar: Vaar) -> Vec<GowriSlot> {
    slots(day, &DAY[usize::from(vaar.index())])
}

pub fn gowri_night(night: TimeWindow, vaar: Vaar) -> Vec<GowriSlot> {
    slots(night, &NIGHT[usize::from(vaar.index())])
}
