//! Error types for calendar parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or constructing calendar values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD[.fraction]`.
    DateFormat(String),
    /// A numeric date component could not be parsed.
    InvalidNumber(String),
    /// Month outside 1..=12.
    MonthOutOfRange(u32),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateFormat(s) => write!(f, "expected YYYY-MM-DD[.frac], got {s:?}"),
            Self::InvalidNumber(s) => write!(f, "invalid number in date: {s:?}"),
            Self::MonthOutOfRange(m) => write!(f, "month {m} outside 1..=12"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::InvalidNumber(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for TimeError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::InvalidNumber(e.to_string())
    }
}
