//! Mean obliquity of the ecliptic.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 22.2
//! (IAU 1980 expression, valid within a few thousand years of J2000).

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees.
///
/// ε0 = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = -46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    OBLIQUITY_J2000_DEG + arcsec / 3600.0
}
