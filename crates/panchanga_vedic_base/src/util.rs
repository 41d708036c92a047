//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg + 180.0) - 180.0;
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Index of the equal-width segment containing `deg`, clamped to `count - 1`.
pub fn segment_index(deg: f64, span_deg: f64, count: u8) -> u8 {
    let idx = (normalize_360(deg) / span_deg).floor() as u8;
    idx.min(count - 1)
}

/// Position within the segment [`segment_index`] picks, degrees in [0, span).
///
/// Measured from that segment's start so the two never disagree at a
/// boundary.
pub fn degrees_in_segment(deg: f64, span_deg: f64, count: u8) -> f64 {
    let start = f64::from(segment_index(deg, span_deg, count)) * span_deg;
    let within = normalize_360(deg) - start;
    if within < 0.0 {
        0.0
    } else if within >= span_deg {
        span_deg * (1.0 - f64::EPSILON)
    } else {
        within
    }
}
