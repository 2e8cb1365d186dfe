//! ΔT = TT − UT estimate.
//!
//! Piecewise model:
//! - before 948: Stephenson & Houlden (1986) quadratic
//! - 948–1620: second Stephenson & Houlden quadratic
//! - 1620–1986: biennial observed table compiled by Meeus, three-point
//!   interpolation
//! - 1986 onward: Espenak & Meeus polynomial fits (NASA eclipse pages)
//!
//! Accuracy is a few seconds in the historical range and about one second
//! for the 21st century, far below what the rise/set model can resolve.

use crate::julian::J2000_JD;

/// Number of biennial samples in [`DELTA_T_TABLE`].
const TABLE_LEN: usize = 184;

/// Julian Day of 1620 January 1 (first table entry).
const TABLE_START_JD: f64 = 2_312_752.5;

/// Days between table entries (two Julian years).
const TABLE_STEP_DAYS: f64 = 730.5;

/// Observed ΔT in seconds, every two years from 1620 to 1986.
#[rustfmt::skip]
const DELTA_T_TABLE: [f64; TABLE_LEN] = [
    124.0, 115.0, 106.0,  98.0,  91.0,  85.0,  79.0,  74.0,  70.0,  65.0,
     62.0,  58.0,  55.0,  53.0,  50.0,  48.0,  46.0,  44.0,  42.0,  40.0,
     37.0,  35.0,  33.0,  31.0,  28.0,  26.0,  24.0,  22.0,  20.0,  18.0,
     16.0,  14.0,  13.0,  12.0,  11.0,  10.0,   9.0,   9.0,   9.0,   9.0,
      9.0,   9.0,   9.0,   9.0,  10.0,  10.0,  10.0,  10.0,  10.0,  11.0,
     11.0,  11.0,  11.0,  11.0,  11.0,  11.0,  12.0,  12.0,  12.0,  12.0,
     12.0,  12.0,  13.0,  13.0,  13.0,  13.0,  14.0,  14.0,  14.0,  15.0,
     15.0,  15.0,  15.0,  16.0,  16.0,  16.0,  16.0,  16.0,  17.0,  17.0,
     17.0,  17.0,  17.0,  17.0,  17.0,  17.0,  16.0,  16.0,  15.0,  14.0,
     13.7,  13.1,  12.7,  12.5,  12.5,  12.5,  12.5,  12.5,  12.5,  12.3,
     12.0,  11.4,  10.6,   9.6,   8.6,   7.5,   6.6,   6.0,   5.7,   5.6,
      5.7,   5.9,   6.2,   6.5,   6.8,   7.1,   7.3,   7.5,   7.7,   7.8,
      7.9,   7.5,   6.4,   5.4,   2.9,   1.6,  -1.0,  -2.7,  -3.6,  -4.7,
     -5.4,  -5.2,  -5.5,  -5.6,  -5.8,  -5.9,  -6.2,  -6.4,  -6.1,  -4.7,
     -2.7,   0.0,   2.6,   5.4,   7.7,  10.5,  13.4,  16.0,  18.2,  20.2,
     21.2,  22.4,  23.5,  23.9,  24.3,  24.0,  23.9,  23.9,  23.7,  24.0,
     24.3,  25.3,  26.2,  27.3,  28.2,  29.1,  30.0,  30.7,  31.4,  32.2,
     33.1,  34.0,  35.0,  36.5,  38.3,  40.2,  42.2,  44.5,  46.5,  48.5,
     50.5,  52.2,  53.8,  54.9,
];

/// Julian Day of 948 January 1 (Julian calendar).
const JD_948: f64 = 2_067_314.5;

/// Julian Day of 1850 January 1.
const JD_1850: f64 = 2_396_758.5;

/// Decimal year at which the table hands over to the polynomial fits.
const TABLE_END_YEAR: f64 = 1986.0;

/// Decimal year for a Julian Day (Julian years from J2000.0).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Estimated ΔT = TT − UT in seconds at the given Julian Day.
pub fn delta_t_seconds(jd: f64) -> f64 {
    let year = decimal_year(jd);
    if jd < JD_948 {
        let c = (jd - JD_948) / 36_525.0;
        1_830.0 - 405.0 * c + 46.5 * c * c
    } else if jd < TABLE_START_JD {
        let c = (jd - JD_1850) / 36_525.0;
        22.5 * c * c
    } else if year < TABLE_END_YEAR {
        from_table(jd)
    } else {
        polynomial_modern(year)
    }
}

/// Three-point interpolation in the biennial table.
fn from_table(jd: f64) -> f64 {
    let position = (jd - TABLE_START_JD) / TABLE_STEP_DAYS;
    let i = (position.floor().max(0.0) as usize).min(TABLE_LEN - 3);
    let n = position - (i as f64 + 1.0);
    let y1 = DELTA_T_TABLE[i];
    let y2 = DELTA_T_TABLE[i + 1];
    let y3 = DELTA_T_TABLE[i + 2];
    let a = y2 - y1;
    let b = y3 - y2;
    y2 + n / 2.0 * (a + b + n * (b - a))
}

/// Espenak & Meeus fits from 1986 onward.
fn polynomial_modern(year: f64) -> f64 {
    if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t * t
    } else {
        let u = (year - 1820.0) / 100.0;
        let long_term = -20.0 + 32.0 * u * u;
        if year < 2150.0 {
            long_term - 0.5628 * (2150.0 - year)
        } else {
            long_term
        }
    }
}
