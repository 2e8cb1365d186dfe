//! Error types for rise/set calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use almanac_time::TimeError;

/// Errors from validating rise/set inputs.
///
/// A body that never reaches the horizon is not an error; the affected
/// event is reported as NaN instead.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RiseSetError {
    /// Error from date parsing.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Horizon name not one of standard/civil/nautical/astronomical.
    UnknownHorizon(String),
}

impl Display for RiseSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::UnknownHorizon(name) => write!(
                f,
                "unknown horizon {name:?} (expected standard, civil, nautical or astronomical)"
            ),
        }
    }
}

impl Error for RiseSetError {}

impl From<TimeError> for RiseSetError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
