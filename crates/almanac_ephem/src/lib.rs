//! Analytic positions of the Sun and Moon.
//!
//! Truncated series tuned for rise/set work: the Sun to about 0.01° and the
//! Moon to about 10″, both as apparent geocentric equatorial coordinates
//! referred to the true equinox of date. Input times are Julian Days in
//! dynamical time (TD).

mod lunar_terms;

pub mod illumination;
pub mod lunar;
pub mod solar;

pub use illumination::{illuminated_fraction_jd, illuminated_fraction_of_moon, moon_phase_angle_deg};
pub use lunar::{
    LunarArguments, lunar_ecliptic_jd, lunar_horizontal_parallax_deg, lunar_position,
    lunar_position_jd,
};
pub use solar::{AU_KM, solar_ecliptic_jd, solar_position, solar_position_jd};
