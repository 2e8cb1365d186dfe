//! Low-accuracy solar coordinates (about 0.01°).
//!
//! The Sun is treated as moving on an unperturbed Keplerian ellipse, with
//! the equation of the centre truncated to three harmonics and a single
//! combined correction for aberration and nutation.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25.

use almanac_frames::{
    EclipticPosition, EquatorialPosition, ecliptic_to_equatorial, mean_obliquity_deg,
};
use almanac_time::{calendar_to_jd, jd_to_centuries, normalize_360};

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Intermediate quantities of the solar theory, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SolarElements {
    apparent_longitude: f64,
    radius_au: f64,
    /// Longitude of the Moon's ascending node, drives the nutation terms.
    omega: f64,
}

fn solar_elements(t: f64) -> SolarElements {
    let t2 = t * t;

    // Geometric mean longitude, mean anomaly, eccentricity of Earth's orbit
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + center;
    let true_anomaly = (m + center).to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    let omega = 125.04 - 1_934.136 * t;
    let apparent_longitude = true_longitude - 0.005_69 - 0.004_78 * omega.to_radians().sin();

    SolarElements {
        apparent_longitude,
        radius_au,
        omega,
    }
}

/// Apparent geocentric ecliptic position of the Sun at a Julian Day (TD).
///
/// Latitude is taken as zero; distance is in AU.
pub fn solar_ecliptic_jd(jd: f64) -> EclipticPosition {
    let el = solar_elements(jd_to_centuries(jd));
    EclipticPosition {
        longitude_deg: normalize_360(el.apparent_longitude),
        latitude_deg: 0.0,
        distance: el.radius_au,
    }
}

/// Apparent geocentric equatorial position of the Sun at a Julian Day (TD).
///
/// The obliquity is ε0 + 0.00256° cos Ω, the true obliquity to the
/// precision of this theory. Right ascension is in (-180, 180]; distance
/// is in AU.
pub fn solar_position_jd(jd: f64) -> EquatorialPosition {
    let t = jd_to_centuries(jd);
    let el = solar_elements(t);
    let obliquity = mean_obliquity_deg(t) + 0.002_56 * el.omega.to_radians().cos();
    let ecl = EclipticPosition {
        longitude_deg: el.apparent_longitude,
        latitude_deg: 0.0,
        distance: el.radius_au,
    };
    ecliptic_to_equatorial(&ecl, obliquity)
}

/// Apparent geocentric equatorial position of the Sun for a Gregorian date.
pub fn solar_position(year: i32, month: u32, day: f64) -> EquatorialPosition {
    solar_position_jd(calendar_to_jd(year, month, day))
}
