//! Half-open time windows on the JD UTC axis.

use serde::Serialize;

/// A half-open interval `[start_jd, end_jd)` with `start_jd < end_jd`.
///
/// Construction fails (returns `None`) for empty, reversed, or non-finite
/// bounds, so an existing window is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TimeWindow {
    pub fn new(start_jd: f64, end_jd: f64) -> Option<Self> {
        (start_jd.is_finite() && end_jd.is_finite() && start_jd < end_jd)
            .then_some(Self { start_jd, end_jd })
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    /// Boundary `i` of `n` equal parts; boundary `n` is exactly `end_jd`.
    fn boundary(&self, i: usize, n: usize) -> f64 {
        if i >= n {
            self.end_jd
        } else {
            self.start_jd + self.duration_days() * i as f64 / n as f64
        }
    }

    /// Part `i` (0-based) of `n` equal parts.
    pub fn part(&self, i: usize, n: usize) -> Self {
        Self {
            start_jd: self.boundary(i, n),
            end_jd: self.boundary(i + 1, n),
        }
    }

    /// Split into `n` equal, exactly contiguous parts.
    pub fn split(&self, n: usize) -> Vec<Self> {
        (0..n).map(|i| self.part(i, n)).collect()
    }

    /// Sub-window at fractional offsets of this window.
    pub fn fraction(&self, from: f64, to: f64) -> Self {
        let d = self.duration_days();
        Self {
            start_jd: self.start_jd + d * from,
            end_jd: self.start_jd + d * to,
        }
    }
}
