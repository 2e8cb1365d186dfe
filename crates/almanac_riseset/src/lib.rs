//! Rise, transit and set times for the Sun and Moon.
//!
//! This crate provides:
//! - A generic solver that refines rise/transit/set from three daily
//!   equatorial positions by quadratic interpolation
//! - Sunrise/sunset and civil, nautical and astronomical twilight
//! - Moonrise/moonset at the mean lunar horizon or from the day's parallax
//!
//! Longitudes are east-positive. When a body stays above or below the
//! horizon all day, its rise and set are NaN; transit is always reported.

pub mod error;
pub mod facade;
pub mod interpolation;
pub mod solver;
pub mod types;

pub use error::RiseSetError;
pub use facade::{
    moon_events, moonrise_moonset, moonrise_moonset_with_parallax, sun_events,
    sun_events_with_config, sunrise_sunset, twilight,
};
pub use interpolation::{interpolate, interpolate_angle};
pub use solver::{REFINEMENT_PASSES, rise_transit_set, rise_transit_set_with_sidereal};
pub use types::{
    GeoLocation, Horizon, MOON_MEAN_HORIZON_DEG, RiseSet, RiseSetConfig, RiseTransitSet,
    STAR_HORIZON_DEG, SUN_STANDARD_HORIZON_DEG,
};
