//! Generic ascending-crossing search over angular functions of time.
//!
//! A function `f(t) -> [0, 360)` that increases steadily (Moon–Sun
//! elongation, sidereal longitudes, their sums) is sampled at a coarse
//! fixed step. For each bracket the unwrapped advance `f(t1) - f(t0)` is
//! compared against the target set; a bracket holding more than one target
//! is split until every sub-bracket holds exactly one, which is then
//! refined by bisection on `normalize_pm180(f(t) - target)`.
//!
//! Crossings outside the window, or whose bisection exceeds its iteration
//! budget, are reported as absent rather than as errors.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use panchanga_vedic_base::TimeWindow;
use panchanga_vedic_base::util::{normalize_360, normalize_to_pm180};

use crate::error::SearchError;

/// Deepest bracket subdivision before a bracket is abandoned.
const MAX_SPLIT_DEPTH: u32 = 12;

/// Sampling and refinement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Coarse sampling step in days. Default: 0.25.
    pub step_days: f64,
    /// Bisection stops once the bracket is narrower than this, in days.
    /// Default: 1e-5 (under a second).
    pub tolerance_days: f64,
    /// Bisection iteration budget per crossing. Default: 60.
    pub max_iterations: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            step_days: 0.25,
            tolerance_days: 1e-5,
            max_iterations: 60,
        }
    }
}

impl LocatorConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.step_days.is_finite() && self.step_days > 0.0) {
            return Err("locator step_days must be positive");
        }
        if !(self.tolerance_days.is_finite() && self.tolerance_days > 0.0) {
            return Err("locator tolerance_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("locator max_iterations must be non-zero");
        }
        Ok(())
    }

    /// Same refinement with a coarser step, for slow movers like the Sun.
    pub fn with_min_step(self, step_days: f64) -> Self {
        Self {
            step_days: self.step_days.max(step_days),
            ..self
        }
    }
}

/// Target angles a search looks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Targets<'a> {
    /// Every multiple of `span_deg` (segment boundaries).
    Uniform { span_deg: f64 },
    /// The listed angles only.
    Explicit(&'a [f64]),
}

impl Targets<'_> {
    /// Targets crossed while ascending from `from` by `advance` degrees,
    /// i.e. inside the arc `(from, from + advance]`, in crossing order.
    fn crossed(&self, from: f64, advance: f64) -> Vec<f64> {
        match *self {
            Self::Uniform { span_deg } => {
                let first = (from / span_deg).floor() + 1.0;
                let last = ((from + advance) / span_deg).floor();
                let count = (last - first + 1.0).max(0.0) as usize;
                (0..count)
                    .map(|k| normalize_360((first + k as f64) * span_deg))
                    .collect()
            }
            Self::Explicit(angles) => {
                let mut hit: Vec<(f64, f64)> = angles
                    .iter()
                    .map(|&a| (normalize_360(a - from), normalize_360(a)))
                    .filter(|&(offset, _)| offset > 0.0 && offset <= advance)
                    .collect();
                hit.sort_by(|a, b| a.0.total_cmp(&b.0));
                hit.into_iter().map(|(_, a)| a).collect()
            }
        }
    }
}

/// One ascending crossing of a target angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crossing {
    pub jd: f64,
    /// Target angle in [0, 360).
    pub target_deg: f64,
}

struct Scan<'f, F> {
    f: &'f F,
    config: LocatorConfig,
}

impl<F> Scan<'_, F>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    /// Resolve the bracket `[t0, t1]` with endpoint values `v0`, `v1`.
    fn bracket(
        &self,
        targets: &Targets<'_>,
        (t0, v0): (f64, f64),
        (t1, v1): (f64, f64),
        depth: u32,
        out: &mut Vec<Crossing>,
    ) -> Result<(), SearchError> {
        let advance = normalize_360(v1 - v0);
        let crossed = targets.crossed(v0, advance);
        match crossed.len() {
            0 => Ok(()),
            1 => {
                trace!(t0, t1, target = crossed[0], "bracketed crossing");
                if let Some(jd) = self.bisect(crossed[0], t0, t1)? {
                    out.push(Crossing {
                        jd,
                        target_deg: crossed[0],
                    });
                }
                Ok(())
            }
            n if depth >= MAX_SPLIT_DEPTH => {
                warn!(t0, t1, targets = n, "bracket still holds several crossings; skipped");
                Ok(())
            }
            _ => {
                let tm = 0.5 * (t0 + t1);
                let vm = (self.f)(tm)?;
                self.bracket(targets, (t0, v0), (tm, vm), depth + 1, out)?;
                self.bracket(targets, (tm, vm), (t1, v1), depth + 1, out)
            }
        }
    }

    /// Bisect `g(t) = normalize_pm180(f(t) - target)` from `g(t0) < 0` to
    /// `g(t1) >= 0`.
    fn bisect(&self, target: f64, mut t0: f64, mut t1: f64) -> Result<Option<f64>, SearchError> {
        let g = |t: f64| -> Result<f64, SearchError> { Ok(normalize_to_pm180((self.f)(t)? - target)) };
        if g(t0)? >= 0.0 || g(t1)? < 0.0 {
            warn!(t0, t1, target, "crossing not bracketed; treated as absent");
            return Ok(None);
        }
        for _ in 0..self.config.max_iterations {
            if t1 - t0 < self.config.tolerance_days {
                return Ok(Some(0.5 * (t0 + t1)));
            }
            let tm = 0.5 * (t0 + t1);
            if g(tm)? < 0.0 {
                t0 = tm;
            } else {
                t1 = tm;
            }
        }
        if t1 - t0 < self.config.tolerance_days {
            return Ok(Some(0.5 * (t0 + t1)));
        }
        warn!(
            t0,
            t1,
            target,
            iterations = self.config.max_iterations,
            "bisection did not converge; crossing treated as absent"
        );
        Ok(None)
    }

    fn run(
        &self,
        window: TimeWindow,
        targets: &Targets<'_>,
        first_only: bool,
    ) -> Result<Vec<Crossing>, SearchError> {
        let mut out = Vec::new();
        let mut t0 = window.start_jd;
        let mut v0 = (self.f)(t0)?;
        while t0 < window.end_jd {
            let t1 = (t0 + self.config.step_days).min(window.end_jd);
            let v1 = (self.f)(t1)?;
            self.bracket(targets, (t0, v0), (t1, v1), 0, &mut out)?;
            if first_only && !out.is_empty() {
                break;
            }
            t0 = t1;
            v0 = v1;
        }
        out.retain(|c| window.contains(c.jd) && c.jd > window.start_jd);
        Ok(out)
    }
}

/// Every ascending crossing of `targets` by `f` inside `window`, in time
/// order.
pub fn find_crossings<F>(
    f: &F,
    window: TimeWindow,
    targets: Targets<'_>,
    config: &LocatorConfig,
) -> Result<Vec<Crossing>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    Scan { f, config: *config }.run(window, &targets, false)
}

/// First crossing after `from_jd`, looking at most `horizon_days` ahead.
pub fn next_crossing<F>(
    f: &F,
    from_jd: f64,
    horizon_days: f64,
    targets: Targets<'_>,
    config: &LocatorConfig,
) -> Result<Option<Crossing>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let Some(window) = TimeWindow::new(from_jd, from_jd + horizon_days) else {
        return Err(SearchError::NonFinite("search start"));
    };
    Ok(Scan { f, config: *config }
        .run(window, &targets, true)?
        .into_iter()
        .next())
}

/// Last crossing at or before `from_jd`, looking at most `horizon_days` back.
pub fn prev_crossing<F>(
    f: &F,
    from_jd: f64,
    horizon_days: f64,
    targets: Targets<'_>,
    config: &LocatorConfig,
) -> Result<Option<Crossing>, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    // Extend by a hair so a crossing exactly at `from_jd` is kept.
    let Some(window) = TimeWindow::new(from_jd - horizon_days, from_jd + 1e-9) else {
        return Err(SearchError::NonFinite("search start"));
    };
    Ok(Scan { f, config: *config }
        .run(window, &targets, false)?
        .pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn window(a: f64, b: f64) -> TimeWindow {
        TimeWindow::new(a, b).unwrap()
    }

    /// 13°/day starting at 350° at t = 0.
    fn moonish(t: f64) -> Result<f64, SearchError> {
        Ok(normalize_360(350.0 + 13.0 * t))
    }

    #[test]
    fn finds_wraparound_crossing() {
        let c = find_crossings(
            &moonish,
            window(0.0, 2.0),
            Targets::Explicit(&[0.0]),
            &LocatorConfig::default(),
        )
        .unwrap();
        assert_eq!(c.len(), 1);
        assert_abs_diff_eq!(c[0].jd, 10.0 / 13.0, epsilon = 1e-4);
    }

    #[test]
    fn uniform_targets_in_order() {
        let c = find_crossings(
            &moonish,
            window(0.0, 3.0),
            Targets::Uniform { span_deg: 12.0 },
            &LocatorConfig::default(),
        )
        .unwrap();
        // 350 → 389: crosses 360, 372, 384.
        let targets: Vec<f64> = c.iter().map(|x| x.target_deg).collect();
        assert_eq!(targets, vec![0.0, 12.0, 24.0]);
        assert!(c.windows(2).all(|w| w[0].jd < w[1].jd));
    }

    #[test]
    fn coarse_step_splits_bracket_with_several_targets() {
        let fast = |t: f64| -> Result<f64, SearchError> { Ok(normalize_360(100.0 * t)) };
        let config = LocatorConfig {
            step_days: 1.0,
            ..LocatorConfig::default()
        };
        let c = find_crossings(&fast, window(0.05, 0.95), Targets::Uniform { span_deg: 30.0 }, &config)
            .unwrap();
        assert_eq!(c.len(), 3);
        assert_abs_diff_eq!(c[1].jd, 0.6, epsilon = 1e-4);
    }

    #[test]
    fn no_root_is_empty_not_error() {
        let c = find_crossings(
            &moonish,
            window(0.0, 0.5),
            Targets::Explicit(&[180.0]),
            &LocatorConfig::default(),
        )
        .unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn exhausted_budget_is_absent() {
        let config = LocatorConfig {
            max_iterations: 2,
            ..LocatorConfig::default()
        };
        let c = next_crossing(&moonish, 0.0, 2.0, Targets::Explicit(&[0.0]), &config).unwrap();
        assert!(c.is_none());
    }

    #[test]
    fn next_and_prev() {
        let config = LocatorConfig::default();
        let next = next_crossing(&moonish, 0.0, 5.0, Targets::Uniform { span_deg: 12.0 }, &config)
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(next.jd, 10.0 / 13.0, epsilon = 1e-4);
        let prev = prev_crossing(&moonish, 2.0, 5.0, Targets::Uniform { span_deg: 12.0 }, &config)
            .unwrap()
            .unwrap();
        // 350 + 13t last passes a multiple of 12 (372) at t = 22/13.
        assert_abs_diff_eq!(prev.jd, 22.0 / 13.0, epsilon = 1e-4);
    }

    #[test]
    fn bad_config_is_rejected() {
        let config = LocatorConfig {
            step_days: 0.0,
            ..LocatorConfig::default()
        };
        let r = find_crossings(&moonish, window(0.0, 1.0), Targets::Explicit(&[0.0]), &config);
        assert!(matches!(r, Err(SearchError::InvalidConfig(_))));
    }
}
