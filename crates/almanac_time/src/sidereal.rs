//! Greenwich mean sidereal time.
//!
//! The apparent sidereal time needs the nutation model and lives in
//! `almanac_frames::sidereal`.
//!
//! All functions take UT Julian Days.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 12.4.

use crate::angle::normalize_360;
use crate::julian::{J2000_JD, calendar_to_jd, jd_to_centuries};

/// Sidereal degrees gained per solar day (360 × 1.00273790935).
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich mean sidereal time in degrees at a given UT Julian Day.
///
/// θ0 = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
///
/// Returns degrees in [0, 360).
pub fn mean_sidereal_time_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + SIDEREAL_DEG_PER_DAY * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(theta)
}

/// Greenwich mean sidereal time in degrees for a Gregorian date (UT).
pub fn mean_sidereal_time_greenwich(year: i32, month: u32, day: f64) -> f64 {
    mean_sidereal_time_deg(calendar_to_jd(year, month, day))
}

/// Local sidereal time from Greenwich sidereal time and east longitude.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(greenwich_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(greenwich_deg + longitude_east_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::hms_to_deg;

    #[test]
    fn gmst_1987_april_10_midnight() {
        let gmst = mean_sidereal_time_greenwich(1987, 4, 10.0);
        let expected = hms_to_deg(13.0, 10.0, 46.3668);
        assert!((gmst - expected).abs() < 0.01, "gmst = {gmst}°, expected {expected}°");
    }

    #[test]
    fn gmst_with_time_of_day() {
        let gmst = mean_sidereal_time_greenwich(1987, 4, 10.80625);
        assert!((gmst - 128.737_87).abs() < 1e-5, "gmst = {gmst}°");
    }

    #[test]
    fn gmst_advances_about_one_degree_per_day() {
        let g1 = mean_sidereal_time_deg(2_451_544.5);
        let g2 = mean_sidereal_time_deg(2_451_545.5);
        let diff = normalize_360(g2 - g1);
        assert!((diff - 0.985_647).abs() < 1e-4, "daily advance = {diff}°");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 0.0] {
            let g = mean_sidereal_time_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn lst_west_longitude() {
        let lst = local_sidereal_time_deg(10.0, -75.0);
        assert!((lst - 295.0).abs() < 1e-12);
    }
}
