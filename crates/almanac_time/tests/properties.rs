//! Property tests for angle round-trips and Julian Day monotonicity.

use almanac_time::{Calendar, deg_to_dms, deg_to_hms, hms_to_deg, julian_day};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hms_roundtrip(deg in 0.0f64..360.0) {
        let hms = deg_to_hms(deg);
        let back = hms_to_deg(hms.hours as f64, hms.minutes as f64, hms.seconds);
        // 359.99999… may come back as 360 - ε or wrap to 0
        let diff = (back - deg).abs().min(360.0 - (back - deg).abs());
        prop_assert!(diff < 1e-4, "{deg} -> {hms:?} -> {back}");
    }

    #[test]
    fn dms_roundtrip(deg in -360.0f64..360.0) {
        let dms = deg_to_dms(deg);
        prop_assert!((dms.to_degrees() - deg).abs() < 1e-9);
    }

    #[test]
    fn gregorian_jd_strictly_increasing(
        year in -4000i32..4000,
        month in 1u32..=12,
        day in 1u32..=28,
        frac in 0.0f64..0.99,
    ) {
        let d = day as f64 + frac;
        let jd = julian_day(year, month, d, Calendar::Gregorian);
        let next_day = julian_day(year, month, d + 0.5, Calendar::Gregorian);
        let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let next_month = julian_day(ny, nm, 1.0, Calendar::Gregorian);
        prop_assert!(next_day > jd);
        prop_assert!(next_month > jd);
    }

    #[test]
    fn julian_jd_strictly_increasing(year in -4712i32..3000, month in 1u32..=12) {
        let jd = julian_day(year, month, 28.0, Calendar::Julian);
        let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let next = julian_day(ny, nm, 1.0, Calendar::Julian);
        prop_assert!(next > jd);
    }
}
