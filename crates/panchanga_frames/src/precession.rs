//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward motion of the equinox along the ecliptic
//! since J2000.0. It carries J2000 ecliptic longitudes to the equinox of
//! date and drives every ayanamsa model.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// General precession in longitude, arcseconds, for `t` Julian centuries (TT).
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
