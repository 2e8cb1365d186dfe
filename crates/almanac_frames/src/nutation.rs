//! IAU 1980 nutation, truncated to the 63 periodic terms of Meeus table 22.A.
//!
//! Computes nutation in longitude (Δψ) and obliquity (Δε), accurate to
//! about 0.0003″ against the full 106-term series, together with the mean
//! obliquity of the ecliptic.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 22.

use almanac_time::{calendar_to_jd, jd_to_centuries};

use crate::obliquity::mean_obliquity_deg;

/// Nutation components and mean obliquity, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub longitude_deg: f64,
    /// Nutation in obliquity Δε.
    pub obliquity_deg: f64,
    /// Mean obliquity of the ecliptic ε0.
    pub mean_obliquity_deg: f64,
}

impl Nutation {
    /// True obliquity ε = ε0 + Δε.
    pub fn true_obliquity_deg(&self) -> f64 {
        self.mean_obliquity_deg + self.obliquity_deg
    }

    /// Equation of the equinoxes Δψ·cos ε, in degrees.
    pub fn equation_of_equinoxes_deg(&self) -> f64 {
        self.longitude_deg * self.true_obliquity_deg().to_radians().cos()
    }
}

/// Fundamental arguments for nutation, in degrees.
///
/// Returns `[D, M, M′, F, Ω]`:
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's mean ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    [d, m, mp, f, om]
}

/// Periodic terms. Each row: `[D, M, M′, F, Ω]` multipliers, then
/// Δψ sine coefficient and its T rate, Δε cosine coefficient and its T rate,
/// all in units of 0.0001″.
#[rustfmt::skip]
static NUTATION_TERMS: [([i8; 5], f64, f64, f64, f64); 63] = [
    ([ 0,  0,  0,  0,  1], -171_996.0, -174.2, 92_025.0,  8.9),
    ([-2,  0,  0,  2,  2],  -13_187.0,   -1.6,  5_736.0, -3.1),
    ([ 0,  0,  0,  2,  2],   -2_274.0,   -0.2,    977.0, -0.5),
    ([ 0,  0,  0,  0,  2],    2_062.0,    0.2,   -895.0,  0.5),
    ([ 0,  1,  0,  0,  0],    1_426.0,   -3.4,     54.0, -0.1),
    ([ 0,  0,  1,  0,  0],      712.0,    0.1,     -7.0,  0.0),
    ([-2,  1,  0,  2,  2],     -517.0,    1.2,    224.0, -0.6),
    ([ 0,  0,  0,  2,  1],     -386.0,   -0.4,    200.0,  0.0),
    ([ 0,  0,  1,  2,  2],     -301.0,    0.0,    129.0, -0.1),
    ([-2, -1,  0,  2,  2],      217.0,   -0.5,    -95.0,  0.3),
    ([-2,  0,  1,  0,  0],     -158.0,    0.0,      0.0,  0.0),
    ([-2,  0,  0,  2,  1],      129.0,    0.1,    -70.0,  0.0),
    ([ 0,  0, -1,  2,  2],      123.0,    0.0,    -53.0,  0.0),
    ([ 2,  0,  0,  0,  0],       63.0,    0.0,      0.0,  0.0),
    ([ 0,  0,  1,  0,  1],       63.0,    0.1,    -33.0,  0.0),
    ([ 2,  0, -1,  2,  2],      -59.0,    0.0,     26.0,  0.0),
    ([ 0,  0, -1,  0,  1],      -58.0,   -0.1,     32.0,  0.0),
    ([ 0,  0,  1,  2,  1],      -51.0,    0.0,     27.0,  0.0),
    ([-2,  0,  2,  0,  0],       48.0,    0.0,      0.0,  0.0),
    ([ 0,  0, -2,  2,  1],       46.0,    0.0,    -24.0,  0.0),
    ([ 2,  0,  0,  2,  2],      -38.0,    0.0,     16.0,  0.0),
    ([ 0,  0,  2,  2,  2],      -31.0,    0.0,     13.0,  0.0),
    ([ 0,  0,  2,  0,  0],       29.0,    0.0,      0.0,  0.0),
    ([-2,  0,  1,  2,  2],       29.0,    0.0,    -12.0,  0.0),
    ([ 0,  0,  0,  2,  0],       26.0,    0.0,      0.0,  0.0),
    ([-2,  0,  0,  2,  0],      -22.0,    0.0,      0.0,  0.0),
    ([ 0,  0, -1,  2,  1],       21.0,    0.0,    -10.0,  0.0),
    ([ 0,  2,  0,  0,  0],       17.0,   -0.1,      0.0,  0.0),
    ([ 2,  0, -1,  0,  1],       16.0,    0.0,     -8.0,  0.0),
    ([-2,  2,  0,  2,  2],      -16.0,    0.1,      7.0,  0.0),
    ([ 0,  1,  0,  0,  1],      -15.0,    0.0,      9.0,  0.0),
    ([-2,  0,  1,  0,  1],      -13.0,    0.0,      7.0,  0.0),
    ([ 0, -1,  0,  0,  1],      -12.0,    0.0,      6.0,  0.0),
    ([ 0,  0,  2, -2,  0],       11.0,    0.0,      0.0,  0.0),
    ([ 2,  0, -1,  2,  1],      -10.0,    0.0,      5.0,  0.0),
    ([ 2,  0,  1,  2,  2],       -8.0,    0.0,      3.0,  0.0),
    ([ 0,  1,  0,  2,  2],        7.0,    0.0,     -3.0,  0.0),
    ([-2,  1,  1,  0,  0],       -7.0,    0.0,      0.0,  0.0),
    ([ 0, -1,  0,  2,  2],       -7.0,    0.0,      3.0,  0.0),
    ([ 2,  0,  0,  2,  1],       -7.0,    0.0,      3.0,  0.0),
    ([ 2,  0,  1,  0,  0],        6.0,    0.0,      0.0,  0.0),
    ([-2,  0,  2,  2,  2],        6.0,    0.0,     -3.0,  0.0),
    ([-2,  0,  1,  2,  1],        6.0,    0.0,     -3.0,  0.0),
    ([ 2,  0, -2,  0,  1],       -6.0,    0.0,      3.0,  0.0),
    ([ 2,  0,  0,  0,  1],       -6.0,    0.0,      3.0,  0.0),
    ([ 0, -1,  1,  0,  0],        5.0,    0.0,      0.0,  0.0),
    ([-2, -1,  0,  2,  1],       -5.0,    0.0,      3.0,  0.0),
    ([-2,  0,  0,  0,  1],       -5.0,    0.0,      3.0,  0.0),
    ([ 0,  0,  2,  2,  1],       -5.0,    0.0,      3.0,  0.0),
    ([-2,  0,  2,  0,  1],        4.0,    0.0,      0.0,  0.0),
    ([-2,  1,  0,  2,  1],        4.0,    0.0,      0.0,  0.0),
    ([ 0,  0,  1, -2,  0],        4.0,    0.0,      0.0,  0.0),
    ([-1,  0,  1,  0,  0],       -4.0,    0.0,      0.0,  0.0),
    ([-2,  1,  0,  0,  0],       -4.0,    0.0,      0.0,  0.0),
    ([ 1,  0,  0,  0,  0],       -4.0,    0.0,      0.0,  0.0),
    ([ 0,  0,  1,  2,  0],        3.0,    0.0,      0.0,  0.0),
    ([ 0,  0, -2,  2,  2],       -3.0,    0.0,      0.0,  0.0),
    ([-1, -1,  1,  0,  0],       -3.0,    0.0,      0.0,  0.0),
    ([ 0,  1,  1,  0,  0],       -3.0,    0.0,      0.0,  0.0),
    ([ 0, -1,  1,  2,  2],       -3.0,    0.0,      0.0,  0.0),
    ([ 2, -1, -1,  2,  2],       -3.0,    0.0,      0.0,  0.0),
    ([ 0,  0,  3,  2,  2],       -3.0,    0.0,      0.0,  0.0),
    ([ 2, -1,  0,  2,  2],       -3.0,    0.0,      0.0,  0.0),
];

/// Nutation and mean obliquity at a Julian Day (dynamical time).
pub fn nutation_jd(jd: f64) -> Nutation {
    let t = jd_to_centuries(jd);
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for (mult, s, s_t, c, c_t) in &NUTATION_TERMS {
        let arg: f64 = mult
            .iter()
            .zip(args.iter())
            .map(|(&k, &a)| k as f64 * a)
            .sum::<f64>()
            .to_radians();
        dpsi += (s + s_t * t) * arg.sin();
        deps += (c + c_t * t) * arg.cos();
    }

    // 0.0001″ → degrees
    const UNIT_TO_DEG: f64 = 1.0e-4 / 3600.0;

    Nutation {
        longitude_deg: dpsi * UNIT_TO_DEG,
        obliquity_deg: deps * UNIT_TO_DEG,
        mean_obliquity_deg: mean_obliquity_deg(t),
    }
}

/// Nutation and mean obliquity for a Gregorian calendar date.
pub fn nutation(year: i32, month: u32, day: f64) -> Nutation {
    nutation_jd(calendar_to_jd(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        let n = nutation(1987, 4, 10.0);
        assert!((n.longitude_deg + 0.001_052).abs() < 1e-6, "Δψ = {}", n.longitude_deg);
        assert!((n.obliquity_deg - 0.002_623).abs() < 1e-6, "Δε = {}", n.obliquity_deg);
        let expected_true = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
        assert!((n.true_obliquity_deg() - expected_true).abs() < 1e-3);
    }

    #[test]
    fn amplitude_bounds() {
        for &jd in &[2_415_020.5, 2_451_545.0, 2_460_310.5, 2_488_069.5] {
            let n = nutation_jd(jd);
            assert!(n.longitude_deg.abs() < 20.0 / 3600.0, "|Δψ| too large at {jd}");
            assert!(n.obliquity_deg.abs() < 10.0 / 3600.0, "|Δε| too large at {jd}");
        }
    }

    #[test]
    fn node_period_dominates() {
        // Values ~18.6 years apart agree to a couple of arcseconds
        let a = nutation_jd(2_451_545.0);
        let b = nutation_jd(2_451_545.0 + 6_798.38);
        assert!((a.longitude_deg - b.longitude_deg).abs() < 2.0 / 3600.0);
    }

    #[test]
    fn equation_of_equinoxes_sign_follows_dpsi() {
        let n = nutation(1987, 4, 10.0);
        let eqeq = n.equation_of_equinoxes_deg();
        assert!(eqeq < 0.0);
        assert!((eqeq - n.longitude_deg * 0.917_5).abs() < 1e-6);
    }
}
