//! Julian Day ↔ calendar conversions.
//!
//! Julian Day 0.0 is noon of -4712 January 1 in the proleptic Julian
//! calendar. Years use astronomical numbering: year 0 is 1 BC, year -1 is
//! 2 BC, and so on. The day component may carry a fraction encoding the
//! time of day (`4.81` is the 4th at 19:26:24).
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7.

/// Julian Day of the J2000.0 epoch (2000 January 1, 12h).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Day of the Gregorian calendar (1582 October 15, 0h).
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.5;

/// Calendar in which a year-month-day triple is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Calendar {
    /// Gregorian calendar (proleptic before 1582 when requested explicitly).
    #[default]
    Gregorian,
    /// Julian calendar; required for dates before the 1582 reform.
    Julian,
}

/// Julian Day for a calendar date.
///
/// January and February count as months 13 and 14 of the previous year.
/// The century correction `2 - A + floor(A/4)` is applied only for the
/// Gregorian calendar. No validation is performed: months outside 1..=12 or
/// days past the end of a month are plain arithmetic inputs.
pub fn julian_day(year: i32, month: u32, day: f64, calendar: Calendar) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let correction = match calendar {
        Calendar::Gregorian => {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        }
        Calendar::Julian => 0.0,
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + correction - 1524.5
}

/// Julian Day for a Gregorian calendar date.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    julian_day(year, month, day, Calendar::Gregorian)
}

/// Calendar date `(year, month, day_with_fraction)` for a Julian Day.
///
/// With [`Calendar::Gregorian`] dates before the 1582 reform come back in
/// the Julian calendar, matching the historical convention. With
/// [`Calendar::Julian`] the Julian calendar is used throughout.
/// Valid for non-negative Julian Days.
pub fn jd_to_calendar(jd: f64, calendar: Calendar) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if calendar == Calendar::Julian || z < GREGORIAN_REFORM_JD + 0.5 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert_eq!(julian_day(2000, 1, 1.5, Calendar::Gregorian), J2000_JD);
    }

    #[test]
    fn julian_day_zero() {
        assert_eq!(julian_day(-4712, 1, 1.5, Calendar::Julian), 0.0);
    }

    #[test]
    fn sputnik_launch() {
        let jd = julian_day(1957, 10, 4.81, Calendar::Gregorian);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn gregorian_reform_is_contiguous() {
        // 1582 Oct 4 (Julian) is followed by 1582 Oct 15 (Gregorian)
        let last_julian = julian_day(1582, 10, 4.0, Calendar::Julian);
        let first_gregorian = julian_day(1582, 10, 15.0, Calendar::Gregorian);
        assert_eq!(first_gregorian - last_julian, 1.0);
        assert_eq!(first_gregorian, GREGORIAN_REFORM_JD);
    }

    #[test]
    fn calendar_to_jd_is_gregorian() {
        assert_eq!(calendar_to_jd(1999, 1, 1.0), 2_451_179.5);
    }

    #[test]
    fn inverse_modern() {
        let (y, m, d) = jd_to_calendar(2_436_116.31, Calendar::Gregorian);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6);
    }

    #[test]
    fn inverse_before_reform() {
        let (y, m, d) = jd_to_calendar(1_842_713.0, Calendar::Gregorian);
        assert_eq!((y, m), (333, 1));
        assert!((d - 27.5).abs() < 1e-9);
    }

    #[test]
    fn inverse_negative_year() {
        let (y, m, d) = jd_to_calendar(1_355_866.5, Calendar::Julian);
        assert_eq!((y, m), (-1000, 2));
        assert!((d - 29.0).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
