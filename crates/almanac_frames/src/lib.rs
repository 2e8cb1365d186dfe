//! Earth-orientation corrections and coordinate helpers.
//!
//! Provides the nutation model, the obliquity of the ecliptic, apparent
//! sidereal time, and the ecliptic → equatorial rotation used by the
//! solar and lunar position models.

pub mod equatorial;
pub mod nutation;
pub mod obliquity;
pub mod sidereal;

pub use equatorial::{
    EclipticPosition, EquatorialPosition, angular_separation_deg, ecliptic_to_equatorial,
};
pub use nutation::{Nutation, fundamental_arguments, nutation, nutation_jd};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use sidereal::{apparent_sidereal_time_deg, apparent_sidereal_time_greenwich};
