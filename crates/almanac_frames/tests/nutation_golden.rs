//! Golden values for nutation and sidereal time (Meeus, examples 12.a, 22.a).

use almanac_frames::{apparent_sidereal_time_greenwich, nutation};
use almanac_time::{hms_to_deg, mean_sidereal_time_greenwich};

#[test]
fn nutation_1987_april_10() {
    let n = nutation(1987, 4, 10.0);
    assert!((n.longitude_deg - -0.001_052).abs() < 1e-6);
    assert!((n.obliquity_deg - 0.002_623).abs() < 1e-6);
    // ε0 = 23°26′27.407″
    let eps0 = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
    assert!((n.mean_obliquity_deg - eps0).abs() < 1e-5, "ε0 = {}", n.mean_obliquity_deg);
    let eps = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
    assert!((n.true_obliquity_deg() - eps).abs() < 1e-3);
}

#[test]
fn sidereal_time_1987_april_10() {
    let mean = mean_sidereal_time_greenwich(1987, 4, 10.0);
    let apparent = apparent_sidereal_time_greenwich(1987, 4, 10.0);
    assert!((mean - hms_to_deg(13.0, 10.0, 46.3668)).abs() < 0.01);
    assert!((apparent - hms_to_deg(13.0, 10.0, 46.1351)).abs() < 1e-5);
    // Equation of the equinoxes is -0.2317 s of time
    let eqeq_s = (apparent - mean) / 15.0 * 3600.0;
    assert!((eqeq_s + 0.2317).abs() < 0.001, "eqeq = {eqeq_s} s");
}
