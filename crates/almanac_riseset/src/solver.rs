//! Rise, transit and set from three daily positions.
//!
//! The body's right ascension and declination are tabulated at 0h TD on the
//! day before, the day itself and the day after. An approximate transit
//! time and half-arc give first estimates, which are then corrected in a
//! fixed number of passes: interpolate the position at the estimated
//! instant, recompute the local hour angle and altitude, and adjust by the
//! altitude (or hour angle) residual.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 15.

use almanac_frames::{EquatorialPosition, apparent_sidereal_time_deg};
use almanac_time::{CalendarDate, SIDEREAL_DEG_PER_DAY, normalize_180, normalize_360};
use tracing::{debug, trace, trace_span};

use crate::interpolation::{interpolate, interpolate_angle};
use crate::types::{GeoLocation, RiseTransitSet};

/// Refinement passes used by the plain entry points.
pub const REFINEMENT_PASSES: u32 = 2;

/// Which event an estimate belongs to; transit uses a different correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Rise,
    Transit,
    Set,
}

/// Rise, transit and set on `date` (UT) for positions sampled at 0h TD on
/// the day before, the day itself and the day after.
///
/// The apparent sidereal time at 0h UT of `date` is computed here.
/// `delta_t_s` is TT − UT in seconds.
pub fn rise_transit_set(
    location: &GeoLocation,
    date: &CalendarDate,
    horizon_deg: f64,
    samples: &[EquatorialPosition; 3],
    delta_t_s: f64,
) -> RiseTransitSet {
    let sidereal_0h = apparent_sidereal_time_deg(date.at_midnight().julian_day());
    solve(location, horizon_deg, samples, sidereal_0h, delta_t_s, REFINEMENT_PASSES)
}

/// Rise, transit and set given the Greenwich apparent sidereal time at 0h
/// UT of the day, in degrees.
pub fn rise_transit_set_with_sidereal(
    location: &GeoLocation,
    horizon_deg: f64,
    samples: &[EquatorialPosition; 3],
    sidereal_0h_deg: f64,
    delta_t_s: f64,
) -> RiseTransitSet {
    solve(location, horizon_deg, samples, sidereal_0h_deg, delta_t_s, REFINEMENT_PASSES)
}

/// Solver core with a caller-chosen number of refinement passes.
pub(crate) fn solve(
    location: &GeoLocation,
    horizon_deg: f64,
    samples: &[EquatorialPosition; 3],
    sidereal_0h_deg: f64,
    delta_t_s: f64,
    passes: u32,
) -> RiseTransitSet {
    let ra = samples.map(|p| p.right_ascension_deg);
    let dec = samples.map(|p| p.declination_deg);
    let phi = location.latitude_rad();
    let dec2 = dec[1].to_radians();

    let transit0 = normalize_day(
        (ra[1] - location.longitude_deg - sidereal_0h_deg) / 360.0,
    );

    let cos_h0 =
        (horizon_deg.to_radians().sin() - phi.sin() * dec2.sin()) / (phi.cos() * dec2.cos());

    let ctx = Refiner {
        location,
        horizon_deg,
        ra,
        dec,
        sidereal_0h_deg,
        delta_t_days: delta_t_s / 86_400.0,
    };
    let transit = ctx.refine(Event::Transit, transit0, passes);

    if !(-1.0..=1.0).contains(&cos_h0) {
        debug!(
            latitude = location.latitude_deg,
            declination = dec[1],
            cos_h0,
            "body does not reach the horizon on this day"
        );
        return RiseTransitSet {
            rise: f64::NAN,
            transit,
            set: f64::NAN,
        };
    }

    let half_arc = cos_h0.acos().to_degrees() / 360.0;
    RiseTransitSet {
        rise: ctx.refine(Event::Rise, normalize_day(transit0 - half_arc), passes),
        transit,
        set: ctx.refine(Event::Set, normalize_day(transit0 + half_arc), passes),
    }
}

/// Shared inputs of the correction passes.
struct Refiner<'a> {
    location: &'a GeoLocation,
    horizon_deg: f64,
    ra: [f64; 3],
    dec: [f64; 3],
    sidereal_0h_deg: f64,
    delta_t_days: f64,
}

impl Refiner<'_> {
    fn refine(&self, event: Event, estimate: f64, passes: u32) -> f64 {
        let mut m = estimate;
        for pass in 0..passes {
            let _span = trace_span!("refine", ?event, pass).entered();
            let correction = self.correction(event, m);
            trace!(m, correction, "refinement step");
            m += correction;
        }
        normalize_day(m)
    }

    /// Δm at day fraction `m`.
    fn correction(&self, event: Event, m: f64) -> f64 {
        let theta = self.sidereal_0h_deg + SIDEREAL_DEG_PER_DAY * m;
        let n = m + self.delta_t_days;
        let alpha = interpolate_angle(self.ra, n);
        let delta = interpolate(self.dec, n).to_radians();
        let hour_angle = normalize_180(theta + self.location.longitude_deg - alpha);

        if event == Event::Transit {
            return -hour_angle / 360.0;
        }

        let phi = self.location.latitude_rad();
        let h = hour_angle.to_radians();
        let sin_alt = phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos();
        let altitude = sin_alt.clamp(-1.0, 1.0).asin().to_degrees();
        (altitude - self.horizon_deg) / (360.0 * delta.cos() * phi.cos() * h.sin())
    }
}

/// Reduce a day fraction into [0, 1).
fn normalize_day(m: f64) -> f64 {
    normalize_360(m * 360.0) / 360.0
}
