//! Illuminated fraction of the Moon's disk.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 48, first method.

use almanac_frames::angular_separation_deg;
use almanac_time::calendar_to_jd;

use crate::lunar::lunar_position_jd;
use crate::solar::{AU_KM, solar_position_jd};

/// Selenocentric elongation of the Earth from the Sun (phase angle), degrees.
///
/// 0° at full Moon, 180° at new Moon.
pub fn moon_phase_angle_deg(jd: f64) -> f64 {
    let sun = solar_position_jd(jd);
    let moon = lunar_position_jd(jd);

    let psi = angular_separation_deg(&sun, &moon).to_radians();
    let sun_km = sun.distance * AU_KM;
    (sun_km * psi.sin())
        .atan2(moon.distance - sun_km * psi.cos())
        .to_degrees()
}

/// Illuminated fraction k = (1 + cos i) / 2 at a Julian Day (TD), in [0, 1].
pub fn illuminated_fraction_jd(jd: f64) -> f64 {
    let i = moon_phase_angle_deg(jd).to_radians();
    ((1.0 + i.cos()) / 2.0).clamp(0.0, 1.0)
}

/// Illuminated fraction of the Moon for a Gregorian date.
pub fn illuminated_fraction_of_moon(year: i32, month: u32, day: f64) -> f64 {
    illuminated_fraction_jd(calendar_to_jd(year, month, day))
}
