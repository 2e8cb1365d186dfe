//! Three-point (quadratic) interpolation in a table of equidistant values.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 3.3.

use almanac_time::normalize_180;

/// Interpolate `y(n)` from tabulated `[y1, y2, y3]` at arguments `-1, 0, +1`.
///
/// `n` is measured from the central value in units of the table step.
///
/// y = y2 + n/2·(a + b + n·c), a = y2 − y1, b = y3 − y2, c = b − a
pub fn interpolate(y: [f64; 3], n: f64) -> f64 {
    combine(y[1], y[1] - y[0], y[2] - y[1], n)
}

/// Interpolate an angle in degrees, unwrapping differences across 0°/360°.
///
/// The result is not normalized.
pub fn interpolate_angle(y: [f64; 3], n: f64) -> f64 {
    combine(
        y[1],
        normalize_180(y[1] - y[0]),
        normalize_180(y[2] - y[1]),
        n,
    )
}

fn combine(y2: f64, a: f64, b: f64, n: f64) -> f64 {
    y2 + n / 2.0 * (a + b + n * (b - a))
}
