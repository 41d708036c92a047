use serde::{Deserialize, Serialize};

use crate::dignity::{Dignity, dignity_in};
use crate::graha::Graha;
use crate::rashi::Rashi;

/// Houses counted from the reference sign that make a chart manglik.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Where Mars' house is counted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangalReference {
    #[default]
    Lagna,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MangalDosha {
    /// Dosha placement, after cancellation.
    pub present: bool,
    /// Mars' house from the reference sign, 1..=12.
    pub house: u8,
    /// Placement was afflicted but Mars sits in its own or exaltation sign.
    pub cancelled: bool,
    pub reference: MangalReference,
}

/// `reference_rashi` is the lagna or Moon sign named by `reference`.
pub fn mangal_dosha(
    mars_rashi: Rashi,
    reference_rashi: Rashi,
    reference: MangalReference,
) -> MangalDosha {
    let house = reference_rashi.house_from(mars_rashi);
    let afflicted = MANGAL_DOSHA_HOUSES.contains(&house);
    let strong = matches!(
        dignity_in(Graha::Mangal, mars_rashi),
        Dignity::OwnSign | Dignity::Exalted
    );
    let cancelled = afflicted && strong;
    MangalDosha {
        present: afflicted && !cancelled,
        house,
        cancelled,
        reference,
    }
}

/// Two charts balance each other when both or neither carry the dosha.
pub fn manglik_compatible(a: &MangalDosha, b: &MangalDosha) -> bool {
    a.present == b.present
}
