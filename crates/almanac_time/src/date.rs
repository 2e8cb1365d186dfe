//! Calendar date value with fractional day.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{Calendar, jd_to_calendar, julian_day};

/// A calendar date whose day may carry a time-of-day fraction.
///
/// The day is plain arithmetic input: `day = 0.0` or `day = 32.0` are legal
/// and resolve to the neighbouring month through [`CalendarDate::julian_day`].
/// This is how the rise/set code samples "yesterday" and "tomorrow".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    /// Astronomical year (0 = 1 BC, may be negative).
    pub year: i32,
    /// Month, 1..=12.
    pub month: u32,
    /// Day of month with optional fraction of a day.
    pub day: f64,
    /// Calendar the triple is expressed in.
    pub calendar: Calendar,
}

impl CalendarDate {
    /// A Gregorian calendar date.
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self {
            year,
            month,
            day,
            calendar: Calendar::Gregorian,
        }
    }

    /// A Julian calendar date.
    pub fn julian(year: i32, month: u32, day: f64) -> Self {
        Self {
            year,
            month,
            day,
            calendar: Calendar::Julian,
        }
    }

    /// Calendar date for a Julian Day.
    pub fn from_jd(jd: f64, calendar: Calendar) -> Self {
        let (year, month, day) = jd_to_calendar(jd, calendar);
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    /// Julian Day of this date.
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year, self.month, self.day, self.calendar)
    }

    /// The same date shifted by `days` (which may be fractional or negative).
    ///
    /// The month is not renormalized.
    pub fn add_days(&self, days: f64) -> Self {
        Self {
            day: self.day + days,
            ..*self
        }
    }

    /// The date at 0h of the same day.
    pub fn at_midnight(&self) -> Self {
        Self {
            day: self.day.floor(),
            ..*self
        }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        let whole = self.day.floor();
        let frac = self.day - whole;
        write!(f, "{sign}{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, whole as i64)?;
        if frac > 1e-9 {
            let digits = format!("{frac:.5}");
            write!(f, "{}", digits.trim_start_matches('0'))?;
        }
        Ok(())
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DD.fff` (Gregorian), with an optional
    /// leading `-` for negative astronomical years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::DateFormat(s.to_string()));
        };
        if y.is_empty() || m.is_empty() || d.is_empty() {
            return Err(TimeError::DateFormat(s.to_string()));
        }

        let year: i32 = y.parse()?;
        let month: u32 = m.parse()?;
        let day: f64 = d.parse()?;
        if !(1..=12).contains(&month) {
            return Err(TimeError::MonthOutOfRange(month));
        }

        Ok(Self::new(if negative { -year } else { year }, month, day))
    }
}
