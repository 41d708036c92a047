//! Rule evaluation for one civil day.
//!
//! Lunar rules are checked against the elements prevailing at sunrise,
//! plus any kshaya tithi that begins and ends inside the day. Rules marked
//! [`Prevailing::Sunset`] are instead checked against the elements at
//! sunset, so a night observance lands on the day whose evening carries
//! the tithi even when its morning does not. When sunset is unavailable
//! those rules are omitted for the day.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::registry::{ekadashi_name, sankranti_name};
use super::rule::{
    AdhikaPolicy, Festival, FestivalResolution, FestivalRule, Prevailing, ResolutionReason,
    RuleName, Trigger,
};
use crate::masa::Masa;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;
use crate::tithi::Tithi;

/// Calendar elements read at one instant of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MomentElements {
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    /// Amanta month containing the instant.
    pub masa: Masa,
    pub adhika: bool,
    pub sun_rashi: Rashi,
}

/// A Sankranti and the civil date it is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SankrantiDay {
    pub rashi: Rashi,
    pub date: NaiveDate,
}

/// Everything the rule engine needs about one civil day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalDay {
    pub date: NaiveDate,
    pub sunrise: MomentElements,
    /// Tithis that start after this sunrise and end before the next.
    pub kshaya: Vec<MomentElements>,
    pub sunset: Option<MomentElements>,
    /// Tithi at the previous civil day's sunrise, when known.
    pub previous_sunrise_tithi: Option<Tithi>,
    /// Tithi at the previous civil day's sunset, when known.
    pub previous_sunset_tithi: Option<Tithi>,
    /// Sankrantis near this date (at least the previous and next one).
    pub sankrantis: Vec<SankrantiDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FestivalOutcome {
    pub festivals: Vec<Festival>,
    pub resolutions: Vec<FestivalResolution>,
}

struct Hit {
    name: String,
    adhika: bool,
}

enum Evaluation {
    Fired(Vec<Hit>),
    Dropped(ResolutionReason),
    NoMatch,
}

/// Match a lunar trigger against one moment, yielding the observance name.
fn match_lunar(rule: &FestivalRule, m: &MomentElements) -> Option<String> {
    let number = m.tithi.number();
    let span_name = match rule.trigger {
        Trigger::TithiInMasa { masa, tithi } => {
            if masa != m.masa || tithi != number {
                return None;
            }
            None
        }
        Trigger::Tithi { tithis } => {
            if !tithis.contains(&number) {
                return None;
            }
            None
        }
        Trigger::TithiSpan {
            masa,
            start,
            day_names,
        } => {
            if masa != m.masa || number < start {
                return None;
            }
            Some(*day_names.get(usize::from(number - start))?)
        }
        _ => return None,
    };
    Some(display_name(rule, m, None, span_name))
}

fn display_name(
    rule: &FestivalRule,
    m: &MomentElements,
    sankranti: Option<Rashi>,
    span_name: Option<&str>,
) -> String {
    let base = match rule.name {
        RuleName::Fixed(name) => name,
        RuleName::EkadashiByMasa => ekadashi_name(m.masa, m.tithi.paksha()),
        RuleName::SankrantiByRashi => sankranti.map_or("Sankranti", sankranti_name),
    };
    match span_name {
        Some(day) => format!("{base}: {day}"),
        None => base.to_string(),
    }
}

fn evaluate_solar(rule: &FestivalRule, day: &FestivalDay) -> Evaluation {
    let hit = match rule.trigger {
        Trigger::Nakshatra {
            nakshatra,
            solar_rashi,
        } => {
            let m = &day.sunrise;
            (m.nakshatra == nakshatra && solar_rashi.is_none_or(|r| r == m.sun_rashi))
                .then(|| display_name(rule, m, None, None))
        }
        Trigger::Sankranti { rashi } => day
            .sankrantis
            .iter()
            .find(|s| s.date == day.date && rashi.is_none_or(|r| r == s.rashi))
            .map(|s| display_name(rule, &day.sunrise, Some(s.rashi), None)),
        Trigger::SankrantiSpan {
            rashi,
            first_offset,
            day_names,
        } => day
            .sankrantis
            .iter()
            .filter(|s| s.rashi == rashi)
            .find_map(|s| {
                let k = (day.date - s.date).num_days() - first_offset;
                let name = day_names.get(usize::try_from(k).ok()?)?;
                Some(display_name(rule, &day.sunrise, Some(s.rashi), Some(*name)))
            }),
        _ => None,
    };
    match hit {
        Some(name) => Evaluation::Fired(vec![Hit {
            name,
            adhika: false,
        }]),
        None => Evaluation::NoMatch,
    }
}

fn evaluate_lunar(rule: &FestivalRule, day: &FestivalDay) -> Evaluation {
    // (moment, tithi at the same moment of the previous day)
    let moments: Vec<(&MomentElements, Option<Tithi>)> = match rule.prevailing {
        Prevailing::Sunrise => std::iter::once((&day.sunrise, day.previous_sunrise_tithi))
            .chain(day.kshaya.iter().map(|k| (k, None)))
            .collect(),
        Prevailing::Sunset => day
            .sunset
            .iter()
            .map(|s| (s, day.previous_sunset_tithi))
            .collect(),
    };

    let mut hits = Vec::new();
    let mut dropped = None;
    for (m, previous) in moments {
        let Some(name) = match_lunar(rule, m) else {
            continue;
        };
        if m.adhika && rule.adhika == AdhikaPolicy::Suppress {
            dropped = Some(ResolutionReason::AdhikaSuppressed);
            continue;
        }
        if previous == Some(m.tithi) {
            dropped = Some(ResolutionReason::RepeatedTithi);
            continue;
        }
        if !hits.iter().any(|h: &Hit| h.name == name) {
            hits.push(Hit {
                name,
                adhika: m.adhika,
            });
        }
    }

    match (hits.is_empty(), dropped) {
        (false, _) => Evaluation::Fired(hits),
        (true, Some(reason)) => Evaluation::Dropped(reason),
        (true, None) => Evaluation::NoMatch,
    }
}

/// Evaluate `rules` for `day`. Conflicts are settled by each rule's
/// `supersedes` list and every rule that matched but was not observed is
/// reported in [`FestivalOutcome::resolutions`].
pub fn evaluate_festivals(day: &FestivalDay, rules: &[FestivalRule]) -> FestivalOutcome {
    let mut fired: Vec<(&FestivalRule, Vec<Hit>)> = Vec::new();
    let mut resolutions = Vec::new();

    for rule in rules {
        let evaluation = if rule.trigger.is_lunar() {
            evaluate_lunar(rule, day)
        } else {
            evaluate_solar(rule, day)
        };
        match evaluation {
            Evaluation::Fired(hits) => fired.push((rule, hits)),
            Evaluation::Dropped(reason) => resolutions.push(FestivalResolution {
                rule: rule.id,
                reason,
            }),
            Evaluation::NoMatch => {}
        }
    }

    let fired_ids: Vec<&'static str> = fired.iter().map(|(rule, _)| rule.id).collect();
    let mut superseded: Vec<(&'static str, &'static str)> = Vec::new();
    for (winner, _) in &fired {
        for &loser in winner.supersedes {
            if fired_ids.contains(&loser) {
                superseded.push((loser, winner.id));
            }
        }
    }
    for &(loser, by) in &superseded {
        resolutions.push(FestivalResolution {
            rule: loser,
            reason: ResolutionReason::Superseded { by },
        });
    }
    for r in &resolutions {
        debug!(date = %day.date, rule = r.rule, reason = ?r.reason, "festival rule not observed");
    }

    let festivals = fired
        .into_iter()
        .filter(|(rule, _)| !superseded.iter().any(|(loser, _)| *loser == rule.id))
        .flat_map(|(rule, hits)| {
            hits.into_iter().map(move |hit| Festival {
                id: rule.id,
                name: hit.name,
                category: rule.category,
                description: rule.description,
                is_fasting_day: rule.fasting,
                regions: rule.regions,
                prevailing: rule.prevailing,
                adhika: hit.adhika,
            })
        })
        .collect();

    FestivalOutcome {
        festivals,
        resolutions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::festival::default_rules;
    use crate::masa::Masa;

    fn moment(masa: Masa, tithi: u8) -> MomentElements {
        MomentElements {
            tithi: Tithi::from_number(tithi),
            nakshatra: Nakshatra::Ashwini,
            masa,
            adhika: false,
            sun_rashi: Rashi::Kumbha,
        }
    }

    fn day(date: (i32, u32, u32), sunrise: MomentElements, sunset: Option<MomentElements>) -> FestivalDay {
        FestivalDay {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            sunrise,
            kshaya: vec![],
            sunset,
            previous_sunrise_tithi: None,
            previous_sunset_tithi: None,
            sankrantis: vec![],
        }
    }

    fn names(outcome: &FestivalOutcome) -> Vec<&str> {
        outcome.festivals.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn maha_shivaratri_follows_sunset() {
        let d = day(
            (2026, 2, 15),
            moment(Masa::Magha, 28),
            Some(moment(Masa::Magha, 29)),
        );
        let out = evaluate_festivals(&d, default_rules());
        let n = names(&out);
        assert!(n.contains(&"Maha Shivaratri"));
        assert!(n.contains(&"Pradosham (Krishna)"));
        assert!(!n.contains(&"Masik Shivaratri"));
    }

    #[test]
    fn masik_shivaratri_the_morning_after() {
        let d = day(
            (2026, 2, 16),
            moment(Masa::Magha, 29),
            Some(moment(Masa::Magha, 30)),
        );
        let n = names(&evaluate_festivals(&d, default_rules())).join(",");
        assert!(n.contains("Masik Shivaratri"));
        assert!(!n.contains("Maha Shivaratri"));
    }

    #[test]
    fn overlap_is_resolved_and_recorded() {
        let d = day(
            (2026, 2, 16),
            moment(Masa::Magha, 29),
            Some(moment(Masa::Magha, 29)),
        );
        let out = evaluate_festivals(&d, default_rules());
        let n = names(&out);
        assert!(n.contains(&"Maha Shivaratri"));
        assert!(!n.contains(&"Masik Shivaratri"));
        assert!(out.resolutions.contains(&FestivalResolution {
            rule: "masik_shivaratri",
            reason: ResolutionReason::Superseded {
                by: "maha_shivaratri"
            },
        }));
    }

    #[test]
    fn missing_sunset_omits_night_rules() {
        let d = day((2026, 2, 15), moment(Masa::Magha, 28), None);
        let out = evaluate_festivals(&d, default_rules());
        let n = names(&out);
        assert!(!n.contains(&"Maha Shivaratri"));
        assert!(n.contains(&"Pradosham (Krishna)"));
    }

    #[test]
    fn kshaya_tithi_is_observed() {
        let mut d = day((2026, 1, 29), moment(Masa::Magha, 10), None);
        d.kshaya.push(moment(Masa::Magha, 11));
        let out = evaluate_festivals(&d, default_rules());
        let n = names(&out);
        assert!(n.contains(&"Jaya Ekadashi"));
    }

    #[test]
    fn adhika_policy() {
        let mut m = moment(Masa::Chaitra, 9);
        m.adhika = true;
        let out = evaluate_festivals(&day((2026, 3, 27), m, None), default_rules());
        assert!(!names(&out).contains(&"Rama Navami"));
        assert!(out.resolutions.iter().any(|r| r.rule == "rama_navami"
            && r.reason == ResolutionReason::AdhikaSuppressed));

        let mut m = moment(Masa::Jyeshtha, 11);
        m.adhika = true;
        let out = evaluate_festivals(&day((2026, 5, 27), m, None), default_rules());
        let ekadashi = out.festivals.iter().find(|f| f.id == "ekadashi");
        assert_eq!(ekadashi.map(|f| (f.name.as_str(), f.adhika)), Some(("Nirjala Ekadashi", true)));
    }

    #[test]
    fn repeated_sunrise_tithi_observes_first_day() {
        let mut d = day((2026, 3, 27), moment(Masa::Chaitra, 9), None);
        d.previous_sunrise_tithi = Some(Tithi::from_number(9));
        let out = evaluate_festivals(&d, default_rules());
        assert!(!names(&out).contains(&"Rama Navami"));
        assert!(out.resolutions.iter().any(|r| r.reason == ResolutionReason::RepeatedTithi));
    }

    #[test]
    fn tithi_spanning_two_sunsets_fires_once() {
        let first = day(
            (2026, 2, 15),
            moment(Masa::Magha, 28),
            Some(moment(Masa::Magha, 29)),
        );
        assert!(names(&evaluate_festivals(&first, default_rules())).contains(&"Maha Shivaratri"));

        let mut second = day(
            (2026, 2, 16),
            moment(Masa::Magha, 29),
            Some(moment(Masa::Magha, 29)),
        );
        second.previous_sunrise_tithi = Some(Tithi::from_number(28));
        second.previous_sunset_tithi = Some(Tithi::from_number(29));
        let out = evaluate_festivals(&second, default_rules());
        let n = names(&out);
        assert!(!n.contains(&"Maha Shivaratri"));
        assert!(out.resolutions.contains(&FestivalResolution {
            rule: "maha_shivaratri",
            reason: ResolutionReason::RepeatedTithi,
        }));
    }

    #[test]
    fn navaratri_day_names() {
        let d = day((2026, 10, 13), moment(Masa::Ashwina, 3), None);
        let out = evaluate_festivals(&d, default_rules());
        let n = names(&out);
        assert!(n.contains(&"Navaratri: Chandraghanta"));
    }

    #[test]
    fn pongal_span_and_makar_sankranti() {
        let sankranti = SankrantiDay {
            rashi: Rashi::Makara,
            date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
        };
        let mut eve = day((2026, 1, 13), moment(Masa::Pausha, 25), None);
        eve.sankrantis.push(sankranti);
        assert!(names(&evaluate_festivals(&eve, default_rules())).contains(&"Pongal: Bhogi"));

        let mut on_day = day((2026, 1, 14), moment(Masa::Pausha, 26), None);
        on_day.sankrantis.push(sankranti);
        let out = evaluate_festivals(&on_day, default_rules());
        let n = names(&out);
        assert!(n.contains(&"Pongal: Thai Pongal"));
        assert_eq!(n.iter().filter(|s| **s == "Makar Sankranti").count(), 1);
        assert!(out.festivals.iter().all(|f| f.id != "sankranti"));

        let mut after = day((2026, 1, 18), moment(Masa::Pausha, 30), None);
        after.sankrantis.push(sankranti);
        assert!(!names(&evaluate_festivals(&after, default_rules()))
            .iter()
            .any(|s| s.starts_with("Pongal")));
    }

    #[test]
    fn nakshatra_rule_needs_solar_month() {
        let mut m = moment(Masa::Shravana, 27);
        m.nakshatra = Nakshatra::Shravana;
        m.sun_rashi = Rashi::Simha;
        let out = evaluate_festivals(&day((2026, 8, 26), m, None), default_rules());
        let n = names(&out);
        assert!(n.contains(&"Onam (Thiruvonam)"));

        m.sun_rashi = Rashi::Karka;
        let out = evaluate_festivals(&day((2026, 7, 30), m, None), default_rules());
        let n = names(&out);
        assert!(!n.contains(&"Onam (Thiruvonam)"));
    }
}
