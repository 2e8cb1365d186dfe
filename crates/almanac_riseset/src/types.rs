//! Types for rise/transit/set and twilight calculations.
//!
//! Provides the observer location, standard horizons, configuration, and the
//! result types returned by the solver and the Sun/Moon facades.

use std::str::FromStr;

use crate::error::RiseSetError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Standard altitude of the Sun's centre at rise and set, degrees
/// (34′ refraction + 16′ semidiameter below the horizon).
pub const SUN_STANDARD_HORIZON_DEG: f64 = -0.8333;

/// Standard altitude of the Moon's centre at rise and set, degrees.
///
/// 0.7275 × mean horizontal parallax (0.9507°) − 34′ refraction.
pub const MOON_MEAN_HORIZON_DEG: f64 = 0.125;

/// Standard altitude of a star or planet at rise and set, degrees.
pub const STAR_HORIZON_DEG: f64 = -0.5667;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location without validation.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, RiseSetError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(RiseSetError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(RiseSetError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        if !altitude_m.is_finite() {
            return Err(RiseSetError::InvalidLocation("altitude must be finite"));
        }
        Ok(Self::new(latitude_deg, longitude_deg, altitude_m))
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Horizon altitudes for solar events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizon {
    /// Upper limb on the refracted horizon: -0.8333°.
    #[default]
    Standard,
    /// Civil twilight, Sun centre at -6°.
    Civil,
    /// Nautical twilight, Sun centre at -12°.
    Nautical,
    /// Astronomical twilight, Sun centre at -18°.
    Astronomical,
}

impl Horizon {
    /// Altitude of the Sun's centre in degrees (negative below the horizon).
    pub fn altitude_deg(self) -> f64 {
        match self {
            Self::Standard => SUN_STANDARD_HORIZON_DEG,
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
        }
    }
}

impl FromStr for Horizon {
    type Err = RiseSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "sunrise" => Ok(Self::Standard),
            "civil" => Ok(Self::Civil),
            "nautical" => Ok(Self::Nautical),
            "astronomical" => Ok(Self::Astronomical),
            _ => Err(RiseSetError::UnknownHorizon(s.to_string())),
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to lower the horizon by the geometric dip for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: false.
    pub altitude_correction: bool,
    /// Number of interpolation/correction passes. Default: 2.
    pub refinement_passes: u32,
    /// Fixed TT − UT in seconds; `None` uses the ΔT model. Default: `None`.
    pub delta_t_override_s: Option<f64>,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: false,
            refinement_passes: 2,
            delta_t_override_s: None,
        }
    }
}

impl RiseSetConfig {
    /// Altitude of the Sun's centre at rise/set at sea level, in degrees.
    ///
    /// `h0 = -(refraction + semidiameter) / 60`
    pub fn horizon_deg(&self) -> f64 {
        -(self.refraction_arcmin + self.semidiameter_arcmin) / 60.0
    }

    /// Geometric dip of the horizon for an observer at `altitude_m`, degrees.
    ///
    /// Zero when the correction is disabled or the observer is at or below
    /// sea level.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }

    /// Moon's rise/set altitude for a given horizontal parallax, in degrees.
    ///
    /// `h0 = 0.7275·π − refraction`
    pub fn moon_horizon_deg(&self, parallax_deg: f64) -> f64 {
        0.7275 * parallax_deg - self.refraction_arcmin / 60.0
    }
}

/// Rise, transit and set as fractions of the UT day, each in [0, 1).
///
/// `rise` and `set` are NaN when the body stays above or below the horizon
/// for the whole day. `transit` is always computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseTransitSet {
    pub rise: f64,
    pub transit: f64,
    pub set: f64,
}

impl RiseTransitSet {
    pub fn rise_hours(&self) -> f64 {
        self.rise * 24.0
    }

    pub fn transit_hours(&self) -> f64 {
        self.transit * 24.0
    }

    pub fn set_hours(&self) -> f64 {
        self.set * 24.0
    }

    /// Whether the body does not cross the horizon on this day.
    pub fn is_circumpolar_or_never_rises(&self) -> bool {
        self.rise.is_nan() && self.set.is_nan()
    }

    /// Rise and set in hours UT.
    pub fn rise_set(&self) -> RiseSet {
        RiseSet {
            rise: self.rise_hours(),
            set: self.set_hours(),
        }
    }
}

/// Rise and set in hours UT, NaN when the event does not occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSet {
    pub rise: f64,
    pub set: f64,
}
