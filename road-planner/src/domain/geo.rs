//! Great-circle geometry on a spherical Earth.

use std::hash::{Hash, Hasher};

/// Radius of the sphere used for every distance calculation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// A point on the sphere.
///
/// Coordinates are stored in radians. Degrees only appear at the edges of
/// the system (database input, map exports), via [`GeoPoint::from_degrees`]
/// and [`GeoPoint::to_degrees`].
///
/// No range validation is performed: out-of-range or non-finite values are
/// carried through and surface as NaN or nonsense distances.
///
/// # Examples
///
/// ```
/// use road_planner::domain::GeoPoint;
///
/// let sf = GeoPoint::from_degrees(37.7749, -122.4194);
/// let la = GeoPoint::from_degrees(34.0522, -118.2437);
///
/// let d = sf.distance_km(&la);
/// assert!((d - 559.1).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from coordinates already in radians.
    pub fn from_radians(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a point from coordinates in degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::from_radians(latitude.to_radians(), longitude.to_radians())
    }

    /// Latitude in radians.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)` in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.latitude.to_degrees(), self.longitude.to_degrees())
    }

    /// Great-circle distance to `other` in kilometres (haversine formula).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let dlat = other.latitude - self.latitude;
        let dlon = other.longitude - self.longitude;

        let h = (dlat / 2.0).sin().powi(2)
            + self.latitude.cos() * other.latitude.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_KM * c
    }
}

// Bitwise comparison keeps `Eq` and `Hash` consistent for floats.
impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::from_degrees(42.3601, -71.0589);
        assert!(p.distance_km(&p).abs() < EPS);
    }

    #[test]
    fn known_distance_san_francisco_boston() {
        let sf = GeoPoint::from_degrees(37.7749, -122.4194);
        let boston = GeoPoint::from_degrees(42.3601, -71.0589);

        // ~4335 km on a 6373 km sphere
        let d = sf.distance_km(&boston);
        assert!((d - 4335.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn quarter_meridian() {
        let equator = GeoPoint::from_degrees(0.0, 0.0);
        let pole = GeoPoint::from_degrees(90.0, 0.0);

        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((equator.distance_km(&pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn antipodes_are_half_circumference_apart() {
        let a = GeoPoint::from_degrees(0.0, 0.0);
        let b = GeoPoint::from_degrees(0.0, 180.0);

        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((a.distance_km(&b) - expected).abs() < 1e-6);
    }

    #[test]
    fn nan_input_propagates() {
        let a = GeoPoint::from_radians(f64::NAN, 0.0);
        let b = GeoPoint::from_radians(0.0, 0.0);
        assert!(a.distance_km(&b).is_nan());
    }

    #[test]
    fn stored_in_radians() {
        let p = GeoPoint::from_degrees(180.0, -90.0);
        assert!((p.latitude() - std::f64::consts::PI).abs() < EPS);
        assert!((p.longitude() + std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;

        let a = GeoPoint::from_degrees(10.0, 20.0);
        let b = GeoPoint::from_degrees(10.0, 20.0);
        let c = GeoPoint::from_degrees(10.0, 20.5);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }
}
