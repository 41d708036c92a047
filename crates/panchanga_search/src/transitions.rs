//! Element transition lists and point lookups.
//!
//! A transition list partitions a window (a Vedic day, sunrise to next
//! sunrise) into the sectors an element passes through. Boundaries come
//! from the shared locator with uniform targets at every sector edge, so a
//! sector that begins and ends inside the window (a kshaya tithi, a skipped
//! nakshatra) shows up as its own segment.

use serde::Serialize;

use panchanga_ephem::{AyanamsaModel, EphemerisGateway};
use panchanga_vedic_base::TimeWindow;

use crate::elements::{ElementKind, element_angle};
use crate::error::SearchError;
use crate::locator::{LocatorConfig, Targets, find_crossings, next_crossing, prev_crossing};

/// Role of a segment within its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentStatus {
    /// Active at the window start.
    Primary,
    /// Begins and ends inside the window; never prevails at its start.
    Skipped,
    /// Begins inside the window and runs past its end.
    Trailing,
}

/// One sector of an element, clipped to the window it was listed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangaElement {
    pub kind: ElementKind,
    /// 0-based sector index.
    pub index: u8,
    pub name: &'static str,
    pub start_jd: f64,
    pub end_jd: f64,
    pub status: SegmentStatus,
}

impl PanchangaElement {
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.start_jd, self.end_jd)
    }
}

/// Partition `window` into the sectors of `kind`.
///
/// The result is non-empty, strictly ascending and contiguous: the first
/// segment starts at `window.start_jd`, the last ends at `window.end_jd`,
/// and each segment starts where the previous one ends.
pub fn transitions_in<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    kind: ElementKind,
    window: TimeWindow,
    model: AyanamsaModel,
    config: &LocatorConfig,
) -> Result<Vec<PanchangaElement>, SearchError> {
    let config = config.with_min_step(kind.min_step_days());
    let angle = |t: f64| element_angle(gateway, kind, t, model);
    let crossings = find_crossings(
        &angle,
        window,
        Targets::Uniform {
            span_deg: kind.span_deg(),
        },
        &config,
    )?;

    let mut segments = Vec::with_capacity(crossings.len() + 1);
    let mut index = kind.index_of(angle(window.start_jd)?);
    let mut start = window.start_jd;
    for crossing in &crossings {
        if crossing.jd <= start {
            continue;
        }
        segments.push(segment(kind, index, start, crossing.jd, SegmentStatus::Skipped));
        index = kind.index_starting_at(crossing.target_deg);
        start = crossing.jd;
    }
    segments.push(segment(kind, index, start, window.end_jd, SegmentStatus::Trailing));

    if let Some(first) = segments.first_mut() {
        first.status = SegmentStatus::Primary;
    }
    Ok(segments)
}

fn segment(kind: ElementKind, index: u8, start_jd: f64, end_jd: f64, status: SegmentStatus) -> PanchangaElement {
    PanchangaElement {
        kind,
        index,
        name: kind.name_of(index),
        start_jd,
        end_jd,
        status,
    }
}

/// The sector of `kind` in force at an instant, with its full extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementInfo {
    pub kind: ElementKind,
    pub index: u8,
    pub name: &'static str,
    /// Degrees already traversed within the sector.
    pub degrees_elapsed: f64,
    /// `None` when the boundary search failed to converge.
    pub start_jd: Option<f64>,
    pub end_jd: Option<f64>,
}

impl ElementInfo {
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.start_jd?, self.end_jd?)
    }

    /// Fraction of the sector elapsed at the query instant, by angle.
    pub fn fraction_elapsed(&self) -> f64 {
        self.degrees_elapsed / self.kind.span_deg()
    }
}

/// Sector of `kind` at `jd_ut` and the boundaries around it.
pub fn element_at<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    kind: ElementKind,
    jd_ut: f64,
    model: AyanamsaModel,
    config: &LocatorConfig,
) -> Result<ElementInfo, SearchError> {
    if !jd_ut.is_finite() {
        return Err(SearchError::NonFinite("element instant"));
    }
    let config = config.with_min_step(kind.min_step_days());
    let angle = |t: f64| element_angle(gateway, kind, t, model);
    let here = angle(jd_ut)?;
    let index = kind.index_of(here);
    let targets = Targets::Uniform {
        span_deg: kind.span_deg(),
    };
    let start = prev_crossing(&angle, jd_ut, kind.horizon_days(), targets, &config)?;
    let end = next_crossing(&angle, jd_ut, kind.horizon_days(), targets, &config)?;
    Ok(ElementInfo {
        kind,
        index,
        name: kind.name_of(index),
        degrees_elapsed: here - f64::from(index) * kind.span_deg(),
        start_jd: start.map(|c| c.jd),
        end_jd: end.map(|c| c.jd),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_ephem::AnalyticEphemeris;
    use panchanga_time::{CivilOffset, UtcTime};

    const IST: i32 = 330;

    fn ist_jd(y: i32, m: u32, d: u32, h: u32, min: u32) -> f64 {
        let utc = UtcTime::new(y, m, d, h, min, 0.0).to_jd_utc();
        utc - CivilOffset::from_minutes(IST).unwrap().as_days()
    }

    #[test]
    fn chaturdashi_to_amavasya_on_2026_02_16() {
        // Delhi sunrise 2026-02-16 ≈ 07:00 IST, next ≈ 06:59 IST.
        let gw = AnalyticEphemeris::new();
        let w = TimeWindow::new(ist_jd(2026, 2, 16, 7, 0), ist_jd(2026, 2, 17, 6, 59)).unwrap();
        let list = transitions_in(&gw, ElementKind::Tithi, w, AyanamsaModel::Lahiri, &LocatorConfig::default())
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].index, 28);
        assert_eq!(list[0].status, SegmentStatus::Primary);
        assert_eq!(list[1].index, 29);
        assert_eq!(list[1].status, SegmentStatus::Trailing);
        let boundary = list[0].end_jd;
        assert!((boundary - ist_jd(2026, 2, 16, 17, 34)).abs() < 0.03, "{boundary}");
    }

    #[test]
    fn karana_list_has_several_segments() {
        let gw = AnalyticEphemeris::new();
        let w = TimeWindow::new(ist_jd(2026, 2, 16, 7, 0), ist_jd(2026, 2, 17, 6, 59)).unwrap();
        let list = transitions_in(&gw, ElementKind::Karana, w, AyanamsaModel::Lahiri, &LocatorConfig::default())
            .unwrap();
        assert!(list.len() >= 2 && list.len() <= 4);
        for pair in list.windows(2) {
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
            assert_eq!((pair[0].index + 1) % 60, pair[1].index);
        }
    }

    #[test]
    fn point_lookup_brackets_instant() {
        let gw = AnalyticEphemeris::new();
        let jd = ist_jd(2026, 2, 15, 12, 0);
        let info = element_at(&gw, ElementKind::Nakshatra, jd, AyanamsaModel::Lahiri, &LocatorConfig::default())
            .unwrap();
        let w = info.window().unwrap();
        assert!(w.contains(jd));
        let hours = w.duration_days() * 24.0;
        assert!((19.0..=28.0).contains(&hours), "{hours}");
        assert!((0.0..1.0).contains(&info.fraction_elapsed()));
    }

    #[test]
    fn sun_rashi_lookup_spans_a_month() {
        let gw = AnalyticEphemeris::new();
        let jd = ist_jd(2026, 2, 15, 12, 0);
        let info = element_at(&gw, ElementKind::SunRashi, jd, AyanamsaModel::Lahiri, &LocatorConfig::default())
            .unwrap();
        assert_eq!(info.name, "Kumbha");
        let days = info.window().unwrap().duration_days();
        assert!((28.0..=32.0).contains(&days), "{days}");
    }
}
