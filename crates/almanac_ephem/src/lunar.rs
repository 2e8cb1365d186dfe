//! Low-accuracy lunar coordinates (about 10″ in longitude, 4″ in latitude).
//!
//! Sums the dominant periodic terms of ELP-2000/82 in longitude, latitude
//! and distance, then applies nutation in longitude for apparent
//! coordinates and rotates to the equator with the true obliquity.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47.

use almanac_frames::{EclipticPosition, EquatorialPosition, ecliptic_to_equatorial, nutation_jd};
use almanac_time::{calendar_to_jd, jd_to_centuries, normalize_360};

use crate::lunar_terms::{LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS};

/// Mean Earth–Moon distance term of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Earth equatorial radius used for the horizontal parallax, km.
const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Mean lunar arguments in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L′.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Moon's argument of latitude F.
    pub latitude_argument: f64,
}

impl LunarArguments {
    /// Evaluate the quartic polynomials at `t` Julian centuries from J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }

    /// Argument `k·[D, M, M′, F]` in radians.
    fn combine(&self, k: &[i8; 4]) -> f64 {
        (k[0] as f64 * self.elongation
            + k[1] as f64 * self.sun_anomaly
            + k[2] as f64 * self.moon_anomaly
            + k[3] as f64 * self.latitude_argument)
            .to_radians()
    }
}

/// Factor for terms containing the Sun's mean anomaly, which shrink with
/// the decreasing eccentricity of Earth's orbit.
fn eccentricity_factor(e: f64, sun_multiplier: i8) -> f64 {
    match sun_multiplier.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    }
}

/// Geometric ecliptic position of the Moon: mean-equinox longitude,
/// latitude and distance in km.
fn geometric_ecliptic(t: f64) -> EclipticPosition {
    let args = LunarArguments::at(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in &LONGITUDE_DISTANCE_TERMS {
        let arg = args.combine(&term.args);
        let factor = eccentricity_factor(e, term.args[1]);
        sum_l += term.sin_l as f64 * factor * arg.sin();
        sum_r += term.cos_r as f64 * factor * arg.cos();
    }

    let mut sum_b = 0.0;
    for term in &LATITUDE_TERMS {
        let arg = args.combine(&term.args);
        sum_b += term.sin_b as f64 * eccentricity_factor(e, term.args[1]) * arg.sin();
    }

    // Venus (A1), Jupiter (A2) and Earth flattening (L′) perturbations
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp = args.mean_longitude.to_radians();
    let f = args.latitude_argument.to_radians();
    let mp = args.moon_anomaly.to_radians();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    EclipticPosition {
        longitude_deg: args.mean_longitude + sum_l / 1.0e6,
        latitude_deg: sum_b / 1.0e6,
        distance: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

/// Apparent geocentric ecliptic position of the Moon at a Julian Day (TD).
///
/// Longitude includes nutation and is reduced to [0, 360); distance in km.
pub fn lunar_ecliptic_jd(jd: f64) -> EclipticPosition {
    let geometric = geometric_ecliptic(jd_to_centuries(jd));
    let n = nutation_jd(jd);
    EclipticPosition {
        longitude_deg: normalize_360(geometric.longitude_deg + n.longitude_deg),
        ..geometric
    }
}

/// Apparent geocentric equatorial position of the Moon at a Julian Day (TD).
///
/// Right ascension is in [0, 360); distance is centre-to-centre in km.
pub fn lunar_position_jd(jd: f64) -> EquatorialPosition {
    let ecl = lunar_ecliptic_jd(jd);
    let obliquity = nutation_jd(jd).true_obliquity_deg();
    ecliptic_to_equatorial(&ecl, obliquity).normalized()
}

/// Apparent geocentric equatorial position of the Moon for a Gregorian date.
pub fn lunar_position(year: i32, month: u32, day: f64) -> EquatorialPosition {
    lunar_position_jd(calendar_to_jd(year, month, day))
}

/// Equatorial horizontal parallax of the Moon, in degrees.
///
/// sin π = 6378.14 km / Δ
pub fn lunar_horizontal_parallax_deg(distance_km: f64) -> f64 {
    (EARTH_RADIUS_KM / distance_km).clamp(-1.0, 1.0).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD_1992_APR_12: f64 = 2_448_724.5;

    #[test]
    fn meeus_example_47a_arguments() {
        let t = jd_to_centuries(JD_1992_APR_12);
        let args = LunarArguments::at(t);
        assert!((normalize_360(args.mean_longitude) - 134.290_182).abs() < 1e-5);
        assert!((normalize_360(args.elongation) - 113.842_304).abs() < 1e-5);
        assert!((normalize_360(args.sun_anomaly) - 97.643_514).abs() < 1e-5);
        assert!((normalize_360(args.moon_anomaly) - 5.150_833).abs() < 1e-5);
        assert!((normalize_360(args.latitude_argument) - 219.889_721).abs() < 1e-5);
    }

    #[test]
    fn meeus_example_47a_ecliptic() {
        let geo = geometric_ecliptic(jd_to_centuries(JD_1992_APR_12));
        assert!((normalize_360(geo.longitude_deg) - 133.162_655).abs() < 1e-5);
        assert!((geo.latitude_deg + 3.229_126).abs() < 1e-5);
        assert!((geo.distance - 368_409.7).abs() < 0.1);
    }

    #[test]
    fn meeus_example_47a_equatorial() {
        let pos = lunar_position(1992, 4, 12.0);
        assert!((pos.right_ascension_deg - 134.688_470).abs() < 1e-3, "α = {}", pos.right_ascension_deg);
        assert!((pos.declination_deg - 13.768_368).abs() < 1e-3, "δ = {}", pos.declination_deg);
        assert!((pos.distance - 368_409.7).abs() < 0.1, "Δ = {}", pos.distance);
    }

    #[test]
    fn parallax_example_47a() {
        // π = 0.991990°
        let p = lunar_horizontal_parallax_deg(368_409.7);
        assert!((p - 0.991_990).abs() < 1e-5, "π = {p}");
    }

    #[test]
    fn distance_stays_in_orbit_bounds() {
        for day in 0..60 {
            let d = lunar_position_jd(2_457_754.5 + day as f64).distance;
            assert!((356_000.0..407_000.0).contains(&d), "Δ = {d} on day {day}");
        }
    }
}
