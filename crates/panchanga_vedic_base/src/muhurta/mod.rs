//! Muhurta calculators: fixed partitions of the day and night.
//!
//! Every calculator is a pure function of the sunrise/sunset bounds (and,
//! for Amrit Kalam and Varjyam, of the current nakshatra's span). Callers
//! that could not determine those bounds omit the output entirely.

pub mod choghadiya;
pub mod gowri;
pub mod kalam;
pub mod muhurta;
pub mod nakshatra_windows;

use serde::Serialize;

pub use choghadiya::{Choghadiya, ChoghadiyaSlot, choghadiya_day, choghadiya_night};
pub use gowri::{Gowri, GowriSlot, gowri_day, gowri_night};
pub use kalam::{Kalam, gulika_kalam, kalam_window, rahu_kalam, yamaganda};
pub use muhurta::{
    DAY_MUHURTAS, abhijit_muhurta, brahma_muhurta, dur_muhurtas, govardhan_muhurta,
    pratah_sandhya,
};
pub use nakshatra_windows::{amrit_kalam, varjyam};

/// Quality of a choghadiya or gowri slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Good,
    Neutral,
    Bad,
}
