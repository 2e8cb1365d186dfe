//! Calendar and time-system conversions.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions across the Gregorian/Julian boundary
//! - Sexagesimal (HMS / DMS) ↔ decimal-degree angle conversion
//! - Greenwich mean sidereal time
//! - A ΔT (TT − UT) estimate for turning civil dates into dynamical time

pub mod angle;
pub mod date;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use angle::{
    Dms, Hms, deg_to_dms, deg_to_hms, dms_to_deg, hms_to_deg, normalize_180, normalize_360,
};
pub use date::CalendarDate;
pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    Calendar, DAYS_PER_CENTURY, GREGORIAN_REFORM_JD, J2000_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, julian_day,
};
pub use sidereal::{
    SIDEREAL_DEG_PER_DAY, local_sidereal_time_deg, mean_sidereal_time_deg,
    mean_sidereal_time_greenwich,
};
