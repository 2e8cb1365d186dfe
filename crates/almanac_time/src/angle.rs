//! Sexagesimal angle formats and angle normalization.
//!
//! Decimal degrees are the canonical representation everywhere in the
//! workspace. Hours-minutes-seconds (right ascension, sidereal time) and
//! degrees-minutes-seconds (declination, latitude) are display forms that
//! round-trip through decimal degrees.

/// An angle expressed as hours, minutes and seconds of time.
///
/// One hour of time is 15 degrees of arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    /// Whole hours (0..23 when produced by [`deg_to_hms`]).
    pub hours: u32,
    /// Whole minutes (0..59).
    pub minutes: u32,
    /// Seconds (0.0..60.0), may include a fractional part.
    pub seconds: f64,
}

/// An angle expressed as degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// True when the angle is negative; the fields below are magnitudes.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u32,
    /// Arc-minutes (0..59).
    pub minutes: u32,
    /// Arc-seconds (0.0..60.0), may include a fractional part.
    pub seconds: f64,
}

impl Hms {
    /// Decimal degrees represented by this value.
    pub fn to_degrees(&self) -> f64 {
        hms_to_deg(self.hours as f64, self.minutes as f64, self.seconds)
    }
}

impl Dms {
    /// Decimal degrees represented by this value.
    pub fn to_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}h{:02}m{:06.3}s", self.hours, self.minutes, self.seconds)
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "+" };
        write!(
            f,
            "{sign}{}°{:02}′{:05.2}″",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Convert hours, minutes and seconds of time to decimal degrees.
///
/// `15 · (h + m/60 + s/3600)`. The sign is taken from the hour component
/// alone and applied to the whole magnitude, so `(-1, 30, 0)` is -22.5°.
/// A negative zero hour (`-0.0`) also marks the value as negative, which is
/// how angles between -1h and 0h are written.
pub fn hms_to_deg(hours: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = hours.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    let deg = 15.0 * magnitude;
    if hours.is_sign_negative() { -deg } else { deg }
}

/// Convert decimal degrees to hours, minutes and seconds of time.
///
/// The angle is first reduced into [0, 360), so the result always lies in
/// [0h, 24h). Hours and minutes are truncated; the remainder is seconds.
pub fn deg_to_hms(deg: f64) -> Hms {
    let hours = (normalize_360(deg) / 15.0).rem_euclid(24.0);
    let whole_hours = hours.trunc();
    let minutes = (hours - whole_hours) * 60.0;
    let whole_minutes = minutes.trunc();
    let seconds = (minutes - whole_minutes) * 60.0;
    Hms {
        hours: whole_hours as u32,
        minutes: whole_minutes as u32,
        seconds,
    }
}

/// Convert degrees, arc-minutes and arc-seconds to decimal degrees.
///
/// Uses the same sign rule as [`hms_to_deg`]: the degree component carries
/// the sign for the whole angle.
pub fn dms_to_deg(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = degrees.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    if degrees.is_sign_negative() { -magnitude } else { magnitude }
}

/// Convert decimal degrees to degrees, arc-minutes and arc-seconds.
///
/// No range reduction is applied; negative input sets [`Dms::negative`].
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.trunc();
    let minutes = (d - degrees) * 60.0;
    let whole_minutes = minutes.trunc();
    Dms {
        negative: deg < 0.0,
        degrees: degrees as u32,
        minutes: whole_minutes as u32,
        seconds: (minutes - whole_minutes) * 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_to_hms_reference_values() {
        let hms = deg_to_hms(232.64);
        assert_eq!((hms.hours, hms.minutes), (15, 30));
        assert!((hms.seconds - 33.6).abs() < 0.01, "got {}", hms.seconds);

        let hms = deg_to_hms(12.0);
        assert_eq!((hms.hours, hms.minutes), (0, 48));
        assert!(hms.seconds.abs() < 0.01);

        let hms = deg_to_hms(345.0);
        assert_eq!((hms.hours, hms.minutes), (23, 0));
        assert!(hms.seconds.abs() < 0.01);

        let hms = deg_to_hms(119.7);
        assert_eq!((hms.hours, hms.minutes), (7, 58));
        assert!((hms.seconds - 48.0).abs() < 0.01);
    }

    #[test]
    fn deg_to_hms_wraps_negative() {
        // -15° is 345°, i.e. 23h
        let hms = deg_to_hms(-15.0);
        assert_eq!((hms.hours, hms.minutes), (23, 0));
        assert!(hms.seconds.abs() < 1e-6);
    }

    #[test]
    fn hms_to_deg_reference_values() {
        assert!((hms_to_deg(7.0, 58.0, 48.0) - 119.7).abs() < 0.01);
        assert!((hms_to_deg(15.0, 8.0, 7.0) - 227.03).abs() < 0.01);
    }

    #[test]
    fn hms_to_deg_negative_hour_negates_whole_value() {
        assert!((hms_to_deg(-1.0, 30.0, 0.0) + 22.5).abs() < 1e-12);
        assert!((hms_to_deg(-2.0, 0.0, 36.0) + 30.15).abs() < 1e-12);
    }

    #[test]
    fn hms_to_deg_negative_zero_hour() {
        assert!((hms_to_deg(-0.0, 30.0, 0.0) + 7.5).abs() < 1e-12);
        assert!((hms_to_deg(0.0, 30.0, 0.0) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn hms_struct_roundtrip() {
        let hms = deg_to_hms(197.693195);
        assert!((hms.to_degrees() - 197.693195).abs() < 1e-9);
    }

    #[test]
    fn dms_roundtrip_negative() {
        let dms = deg_to_dms(-7.78507);
        assert!(dms.negative);
        assert_eq!(dms.degrees, 7);
        assert_eq!(dms.minutes, 47);
        assert!((dms.to_degrees() + 7.78507).abs() < 1e-12);
    }

    #[test]
    fn dms_to_deg_sign_from_degrees() {
        assert!((dms_to_deg(23.0, 26.0, 21.448) - 23.439_291_1).abs() < 1e-6);
        assert!((dms_to_deg(-23.0, 26.0, 21.448) + 23.439_291_1).abs() < 1e-6);
    }

    #[test]
    fn normalize_ranges() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_180(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(normalize_180(180.0), 180.0);
    }

    #[test]
    fn display_formats() {
        let hms = Hms { hours: 13, minutes: 10, seconds: 46.3668 };
        assert_eq!(hms.to_string(), "13h10m46.367s");
        let dms = deg_to_dms(-7.5);
        assert_eq!(dms.to_string(), "-7°30′00.00″");
    }
}
