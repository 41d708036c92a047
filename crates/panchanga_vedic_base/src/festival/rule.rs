//! Festival rule records and the observances they produce.

use serde::Serialize;

use crate::masa::Masa;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalCategory {
    Major,
    Vrat,
    Regional,
    Solar,
    Ekadashi,
    Jayanti,
    Minor,
}

/// Which instant of the civil day a rule reads its elements at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prevailing {
    #[default]
    Sunrise,
    Sunset,
}

/// Behaviour of a lunar rule inside an Adhika (intercalary) month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdhikaPolicy {
    /// Not observed in Adhika months; the following Nija month carries it.
    #[default]
    Suppress,
    /// Observed in Adhika months as well, flagged on the observance.
    Observe,
}

/// Tithis are 1-based numbers, 1..=30 (Shukla 1..=15, Krishna 16..=30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    TithiInMasa { masa: Masa, tithi: u8 },
    Tithi { tithis: &'static [u8] },
    Nakshatra {
        nakshatra: Nakshatra,
        /// Sun's sidereal rashi the nakshatra must fall under.
        solar_rashi: Option<Rashi>,
    },
    /// Day on which the Sun enters `rashi` (any rashi when `None`).
    Sankranti { rashi: Option<Rashi> },
    /// Consecutive civil days anchored on a Sankranti day; `first_offset`
    /// is the first day's offset from it.
    SankrantiSpan {
        rashi: Rashi,
        first_offset: i64,
        day_names: &'static [&'static str],
    },
    /// Consecutive tithis of one masa starting at `start`.
    TithiSpan {
        masa: Masa,
        start: u8,
        day_names: &'static [&'static str],
    },
}

impl Trigger {
    /// Solar triggers ignore the lunar month, so Adhika never applies.
    pub const fn is_lunar(&self) -> bool {
        !matches!(
            self,
            Self::Sankranti { .. } | Self::SankrantiSpan { .. } | Self::Nakshatra { .. }
        )
    }
}

/// How a rule's display name is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RuleName {
    Fixed(&'static str),
    /// One of the 24 Ekadashi names keyed by masa and paksha.
    EkadashiByMasa,
    /// "<Rashi> Sankranti".
    SankrantiByRashi,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FestivalRule {
    pub id: &'static str,
    pub name: RuleName,
    pub trigger: Trigger,
    pub prevailing: Prevailing,
    pub category: FestivalCategory,
    pub fasting: bool,
    pub description: &'static str,
    pub regions: &'static [&'static str],
    pub adhika: AdhikaPolicy,
    /// Rule ids this rule displaces when both fire on the same day.
    pub supersedes: &'static [&'static str],
}

impl FestivalRule {
    /// A sunrise-prevailing rule with no regions, Adhika suppression and
    /// nothing superseded.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        trigger: Trigger,
        category: FestivalCategory,
    ) -> Self {
        Self {
            id,
            name: RuleName::Fixed(name),
            trigger,
            prevailing: Prevailing::Sunrise,
            category,
            fasting: false,
            description: "",
            regions: &[],
            adhika: AdhikaPolicy::Suppress,
            supersedes: &[],
        }
    }

    pub const fn named(mut self, name: RuleName) -> Self {
        self.name = name;
        self
    }

    pub const fn at_sunset(mut self) -> Self {
        self.prevailing = Prevailing::Sunset;
        self
    }

    pub const fn fasting(mut self) -> Self {
        self.fasting = true;
        self
    }

    pub const fn described(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn regions(mut self, regions: &'static [&'static str]) -> Self {
        self.regions = regions;
        self
    }

    pub const fn observe_in_adhika(mut self) -> Self {
        self.adhika = AdhikaPolicy::Observe;
        self
    }

    pub const fn supersedes(mut self, ids: &'static [&'static str]) -> Self {
        self.supersedes = ids;
        self
    }
}

/// One observance on one civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Festival {
    pub id: &'static str,
    pub name: String,
    pub category: FestivalCategory,
    pub description: &'static str,
    pub is_fasting_day: bool,
    pub regions: &'static [&'static str],
    pub prevailing: Prevailing,
    /// Observed inside an Adhika month.
    pub adhika: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionReason {
    /// Both fired; the winner's `supersedes` names the loser.
    Superseded { by: &'static str },
    /// The sunrise tithi repeats yesterday's; observed on the first day.
    RepeatedTithi,
    /// Trigger matched inside an Adhika month under [`AdhikaPolicy::Suppress`].
    AdhikaSuppressed,
}

/// A rule whose trigger matched but which was not observed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FestivalResolution {
    pub rule: &'static str,
    pub reason: ResolutionReason,
}
