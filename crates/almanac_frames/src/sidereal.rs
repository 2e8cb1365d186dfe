//! Greenwich apparent sidereal time.
//!
//! Apparent sidereal time is the mean sidereal time corrected by the
//! equation of the equinoxes Δψ·cos ε.

use almanac_time::{calendar_to_jd, mean_sidereal_time_deg, normalize_360};

use crate::nutation::nutation_jd;

/// Greenwich apparent sidereal time in degrees at a UT Julian Day.
///
/// Nutation is evaluated at the same instant; the TT−UT difference changes
/// Δψ by far less than the precision of the result.
///
/// Returns degrees in [0, 360).
pub fn apparent_sidereal_time_deg(jd_ut: f64) -> f64 {
    let n = nutation_jd(jd_ut);
    normalize_360(mean_sidereal_time_deg(jd_ut) + n.equation_of_equinoxes_deg())
}

/// Greenwich apparent sidereal time in degrees for a Gregorian date (UT).
pub fn apparent_sidereal_time_greenwich(year: i32, month: u32, day: f64) -> f64 {
    apparent_sidereal_time_deg(calendar_to_jd(year, month, day))
}
