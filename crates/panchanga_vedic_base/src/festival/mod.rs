//! Registry-driven festival determination.
//!
//! A [`FestivalRule`] pairs a [`Trigger`] with display metadata. The
//! caller resolves a [`FestivalDay`] (elements at sunrise and sunset,
//! kshaya tithis, nearby Sankrantis) and [`evaluate_festivals`] matches
//! every rule against it.

mod engine;
mod registry;
mod rule;

pub use engine::{FestivalDay, FestivalOutcome, MomentElements, SankrantiDay, evaluate_festivals};
pub use registry::{default_rules, ekadashi_name, rule_by_id, sankranti_name};
pub use rule::{
    AdhikaPolicy, Festival, FestivalCategory, FestivalResolution, FestivalRule, Prevailing,
    ResolutionReason, RuleName, Trigger,
};
