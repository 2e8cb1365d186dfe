//! Sunrise/sunset, twilight and moonrise/moonset for a calendar date.
//!
//! Each facade samples the body's apparent position at 0h TD on the day
//! before, the day itself and the day after, estimates ΔT for the date, and
//! hands the samples to the solver. Times are UT, in hours for [`RiseSet`]
//! and as day fractions for [`RiseTransitSet`].

use almanac_ephem::{lunar_horizontal_parallax_deg, lunar_position_jd, solar_position_jd};
use almanac_frames::{EquatorialPosition, apparent_sidereal_time_deg};
use almanac_time::{CalendarDate, delta_t_seconds};
use tracing::debug;

use crate::solver::{rise_transit_set, solve};
use crate::types::{
    GeoLocation, Horizon, MOON_MEAN_HORIZON_DEG, RiseSet, RiseSetConfig, RiseTransitSet,
};

/// Positions at 0h TD of the day before, the day itself and the day after.
fn daily_samples(jd_0h: f64, position: impl Fn(f64) -> EquatorialPosition) -> [EquatorialPosition; 3] {
    [position(jd_0h - 1.0), position(jd_0h), position(jd_0h + 1.0)]
}

/// Sunrise and sunset in hours UT for a horizon altitude in degrees.
///
/// Use [`SUN_STANDARD_HORIZON_DEG`](crate::SUN_STANDARD_HORIZON_DEG) for the
/// conventional upper-limb event or a [`Horizon`] twilight altitude.
pub fn sunrise_sunset(location: &GeoLocation, date: &CalendarDate, horizon_deg: f64) -> RiseSet {
    sun_events(location, date, horizon_deg).rise_set()
}

/// Dawn and dusk in hours UT for a named twilight horizon.
pub fn twilight(location: &GeoLocation, date: &CalendarDate, horizon: Horizon) -> RiseSet {
    sunrise_sunset(location, date, horizon.altitude_deg())
}

/// Sunrise, solar transit and sunset as fractions of the UT day.
pub fn sun_events(location: &GeoLocation, date: &CalendarDate, horizon_deg: f64) -> RiseTransitSet {
    let day = date.at_midnight();
    let jd = day.julian_day();
    let samples = daily_samples(jd, solar_position_jd);
    rise_transit_set(location, &day, horizon_deg, &samples, delta_t_seconds(jd))
}

/// Sunrise, solar transit and sunset with the horizon, dip, pass count and
/// ΔT taken from `config`.
pub fn sun_events_with_config(
    location: &GeoLocation,
    date: &CalendarDate,
    config: &RiseSetConfig,
) -> RiseTransitSet {
    let horizon = config.horizon_deg() - config.dip_deg(location.altitude_m);
    events_with_config(location, date, config, horizon, solar_position_jd)
}

/// Moonrise and moonset in hours UT at the Moon's mean horizon (+0.125°).
pub fn moonrise_moonset(location: &GeoLocation, date: &CalendarDate) -> RiseSet {
    moon_events(location, date, MOON_MEAN_HORIZON_DEG).rise_set()
}

/// Moonrise, lunar transit and moonset as fractions of the UT day.
pub fn moon_events(location: &GeoLocation, date: &CalendarDate, horizon_deg: f64) -> RiseTransitSet {
    let day = date.at_midnight();
    let jd = day.julian_day();
    let samples = daily_samples(jd, lunar_position_jd);
    rise_transit_set(location, &day, horizon_deg, &samples, delta_t_seconds(jd))
}

/// Moonrise and moonset in hours UT using the day's actual parallax
/// instead of the mean horizon.
///
/// `h0 = 0.7275·π − refraction − dip`, with π from the Moon's distance at
/// 0h TD.
pub fn moonrise_moonset_with_parallax(
    location: &GeoLocation,
    date: &CalendarDate,
    config: &RiseSetConfig,
) -> RiseSet {
    let jd = date.at_midnight().julian_day();
    let parallax = lunar_horizontal_parallax_deg(lunar_position_jd(jd).distance);
    let horizon = config.moon_horizon_deg(parallax) - config.dip_deg(location.altitude_m);
    debug!(parallax, horizon, "lunar horizon from parallax");
    events_with_config(location, date, config, horizon, lunar_position_jd).rise_set()
}

fn events_with_config(
    location: &GeoLocation,
    date: &CalendarDate,
    config: &RiseSetConfig,
    horizon_deg: f64,
    position: impl Fn(f64) -> EquatorialPosition,
) -> RiseTransitSet {
    let day = date.at_midnight();
    let jd = day.julian_day();
    let samples = daily_samples(jd, position);
    let delta_t = config.delta_t_override_s.unwrap_or_else(|| delta_t_seconds(jd));
    let sidereal = apparent_sidereal_time_deg(jd);
    solve(location, horizon_deg, &samples, sidereal, delta_t, config.refinement_passes)
}
