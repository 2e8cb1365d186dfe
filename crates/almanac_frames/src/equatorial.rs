//! Ecliptic ↔ equatorial coordinates and angular separation.

use almanac_time::normalize_360;

/// Geocentric ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees.
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Distance from the geocentre; units depend on the body (AU or km).
    pub distance: f64,
}

/// Geocentric equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees.
    pub right_ascension_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub declination_deg: f64,
    /// Distance from the geocentre; AU for the Sun, km for the Moon.
    pub distance: f64,
}

impl EquatorialPosition {
    pub fn new(right_ascension_deg: f64, declination_deg: f64, distance: f64) -> Self {
        Self {
            right_ascension_deg,
            declination_deg,
            distance,
        }
    }

    /// The same position with right ascension reduced to [0, 360).
    pub fn normalized(self) -> Self {
        Self {
            right_ascension_deg: normalize_360(self.right_ascension_deg),
            ..self
        }
    }
}

/// Rotate an ecliptic position into equatorial coordinates.
///
/// tan α = (sin λ cos ε − tan β sin ε) / cos λ
/// sin δ = sin β cos ε + cos β sin ε sin λ
///
/// Right ascension comes straight from `atan2` and lies in (-180, 180].
pub fn ecliptic_to_equatorial(ecl: &EclipticPosition, obliquity_deg: f64) -> EquatorialPosition {
    let lambda = ecl.longitude_deg.to_radians();
    let beta = ecl.latitude_deg.to_radians();
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();

    let ra = (lambda.sin() * cos_eps - beta.tan() * sin_eps).atan2(lambda.cos());
    let sin_dec = beta.sin() * cos_eps + beta.cos() * sin_eps * lambda.sin();

    EquatorialPosition {
        right_ascension_deg: ra.to_degrees(),
        declination_deg: sin_dec.clamp(-1.0, 1.0).asin().to_degrees(),
        distance: ecl.distance,
    }
}

/// Angular separation between two equatorial positions, in degrees.
///
/// cos ψ = sin δ1 sin δ2 + cos δ1 cos δ2 cos(α1 − α2)
pub fn angular_separation_deg(a: &EquatorialPosition, b: &EquatorialPosition) -> f64 {
    let d1 = a.declination_deg.to_radians();
    let d2 = b.declination_deg.to_radians();
    let dra = (a.right_ascension_deg - b.right_ascension_deg).to_radians();
    let cos_psi = d1.sin() * d2.sin() + d1.cos() * d2.cos() * dra.cos();
    cos_psi.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinox_point_maps_to_origin() {
        let ecl = EclipticPosition {
            longitude_deg: 0.0,
            latitude_deg: 0.0,
            distance: 1.0,
        };
        let eq = ecliptic_to_equatorial(&ecl, 23.44);
        assert!(eq.right_ascension_deg.abs() < 1e-12);
        assert!(eq.declination_deg.abs() < 1e-12);
        assert_eq!(eq.distance, 1.0);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let ecl = EclipticPosition {
            longitude_deg: 90.0,
            latitude_deg: 0.0,
            distance: 1.0,
        };
        let eq = ecliptic_to_equatorial(&ecl, 23.44);
        assert!((eq.right_ascension_deg - 90.0).abs() < 1e-9);
        assert!((eq.declination_deg - 23.44).abs() < 1e-9);
    }

    #[test]
    fn pollux_meeus_example_13a() {
        // λ = 113.215630°, β = 6.684170°, ε = 23.4392911° → α = 116.328942°, δ = 28.026183°
        let ecl = EclipticPosition {
            longitude_deg: 113.215_630,
            latitude_deg: 6.684_170,
            distance: 1.0,
        };
        let eq = ecliptic_to_equatorial(&ecl, 23.439_291_1);
        assert!((eq.right_ascension_deg - 116.328_942).abs() < 1e-5);
        assert!((eq.declination_deg - 28.026_183).abs() < 1e-5);
    }

    #[test]
    fn ra_wraps_negative_for_third_quadrant() {
        let ecl = EclipticPosition {
            longitude_deg: 200.0,
            latitude_deg: 0.0,
            distance: 1.0,
        };
        let eq = ecliptic_to_equatorial(&ecl, 23.44);
        assert!(eq.right_ascension_deg < 0.0);
        let n = eq.normalized();
        assert!((n.right_ascension_deg - (eq.right_ascension_deg + 360.0)).abs() < 1e-12);
    }

    #[test]
    fn separation_basic() {
        let a = EquatorialPosition::new(10.0, 0.0, 1.0);
        let b = EquatorialPosition::new(40.0, 0.0, 1.0);
        assert!((angular_separation_deg(&a, &b) - 30.0).abs() < 1e-9);
        let pole = EquatorialPosition::new(123.0, 90.0, 1.0);
        assert!((angular_separation_deg(&a, &pole) - 90.0).abs() < 1e-9);
    }
}
