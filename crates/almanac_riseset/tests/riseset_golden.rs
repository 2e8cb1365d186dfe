//! Golden values for rise/transit/set.
//!
//! Venus at Boston is Meeus example 15.a; the Ottawa and Inuvik times
//! (hours UT) agree with published almanac values to within a minute.

use almanac_frames::EquatorialPosition;
use almanac_riseset::{
    GeoLocation, Horizon, STAR_HORIZON_DEG, SUN_STANDARD_HORIZON_DEG, moonrise_moonset,
    rise_transit_set, sunrise_sunset, twilight,
};
use almanac_time::CalendarDate;

/// Two minutes, in hours.
const TWO_MINUTES: f64 = 2.0 / 60.0;

fn ottawa() -> GeoLocation {
    GeoLocation::new(45.4215, -75.6972, 0.0)
}

fn assert_hours(label: &str, got: f64, expected: f64, tol: f64) {
    assert!(
        (got - expected).abs() < tol,
        "{label}: got {got:.4} h, expected {expected:.4} h"
    );
}

#[test]
fn venus_boston_1988_march_20() {
    let location = GeoLocation::new(42.3333, -71.0833, 0.0);
    let date = CalendarDate::new(1988, 3, 20.0);
    let samples = [
        EquatorialPosition::new(40.680_21, 18.047_61, 0.0),
        EquatorialPosition::new(41.731_29, 18.440_92, 0.0),
        EquatorialPosition::new(42.782_04, 18.827_42, 0.0),
    ];
    let r = rise_transit_set(&location, &date, STAR_HORIZON_DEG, &samples, 56.0);
    assert!((r.rise - 0.517_66).abs() < 5e-6, "rise = {}", r.rise);
    assert!((r.transit - 0.819_80).abs() < 5e-6, "transit = {}", r.transit);
    assert!((r.set - 0.121_30).abs() < 5e-6, "set = {}", r.set);
}

#[test]
fn ottawa_sunrise_sunset_march() {
    let rs = sunrise_sunset(&ottawa(), &CalendarDate::new(2017, 3, 13.0), SUN_STANDARD_HORIZON_DEG);
    assert_hours("sunrise", rs.rise, 11.32, TWO_MINUTES);
    assert_hours("sunset", rs.set, 23.12, TWO_MINUTES);
}

#[test]
fn ottawa_sunrise_sunset_june() {
    // Sunset falls after 0h UT of the next day and wraps into [0, 24)
    let rs = sunrise_sunset(&ottawa(), &CalendarDate::new(2017, 6, 20.0), SUN_STANDARD_HORIZON_DEG);
    assert_hours("sunrise", rs.rise, 9.25, TWO_MINUTES);
    assert_hours("sunset", rs.set, 0.9, TWO_MINUTES);
}

#[test]
fn ottawa_civil_twilight() {
    let rs = twilight(&ottawa(), &CalendarDate::new(2017, 3, 13.0), Horizon::Civil);
    assert_hours("dawn", rs.rise, 10.82, TWO_MINUTES);
    assert_hours("dusk", rs.set, 23.6, TWO_MINUTES);

    let same = sunrise_sunset(&ottawa(), &CalendarDate::new(2017, 3, 13.0), -6.0);
    assert_eq!(rs, same);
}

#[test]
fn inuvik_midnight_sun() {
    let inuvik = GeoLocation::new(68.72, -133.36, 0.0);
    let rs = sunrise_sunset(&inuvik, &CalendarDate::new(2017, 6, 20.0), SUN_STANDARD_HORIZON_DEG);
    assert!(rs.rise.is_nan(), "rise = {}", rs.rise);
    assert!(rs.set.is_nan(), "set = {}", rs.set);
}

#[test]
fn ottawa_moonrise_moonset() {
    let rs = moonrise_moonset(&ottawa(), &CalendarDate::new(2017, 3, 16.0));
    assert_hours("moonrise", rs.rise, 2.40, TWO_MINUTES);
    assert_hours("moonset", rs.set, 13.37, TWO_MINUTES);
}
