//! Named locations.

use std::fmt;

use super::GeoPoint;

/// A city in the database: a name, the region it belongs to, and a point.
///
/// Equality and hashing cover all four fields (name, region, latitude and
/// longitude), so two records with the same key but different coordinates
/// are different locations.
///
/// # Examples
///
/// ```
/// use road_planner::domain::Location;
///
/// let sf = Location::from_degrees("San Francisco", "CA", 37.7749, -122.4194);
/// assert_eq!(sf.to_string(), "San Francisco, CA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    name: String,
    region: String,
    point: GeoPoint,
}

impl Location {
    /// Creates a location at the given point.
    pub fn new(name: impl Into<String>, region: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            point,
        }
    }

    /// Creates a location from coordinates in degrees.
    pub fn from_degrees(
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::new(name, region, GeoPoint::from_degrees(latitude, longitude))
    }

    /// City name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region (state, province, ...) code.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The database key for this location.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.region)
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.point.distance_km(&other.point)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let loc = Location::from_degrees("Boston", "MA", 42.3601, -71.0589);
        assert_eq!(loc.name(), "Boston");
        assert_eq!(loc.region(), "MA");
        assert_eq!(loc.key(), ("Boston", "MA"));

        let (lat, lon) = loc.point().to_degrees();
        assert!((lat - 42.3601).abs() < 1e-9);
        assert!((lon + 71.0589).abs() < 1e-9);
    }

    #[test]
    fn display() {
        let loc = Location::from_degrees("Portland", "OR", 45.5152, -122.6784);
        assert_eq!(format!("{}", loc), "Portland, OR");
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = Location::from_degrees("Portland", "OR", 45.5152, -122.6784);
        let same = Location::from_degrees("Portland", "OR", 45.5152, -122.6784);
        let other_region = Location::from_degrees("Portland", "ME", 45.5152, -122.6784);
        let moved = Location::from_degrees("Portland", "OR", 45.0, -122.6784);

        assert_eq!(a, same);
        assert_ne!(a, other_region);
        assert_ne!(a, moved);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut visited = HashSet::new();
        visited.insert(Location::from_degrees("Reno", "NV", 39.5296, -119.8138));

        assert!(visited.contains(&Location::from_degrees("Reno", "NV", 39.5296, -119.8138)));
        assert!(!visited.contains(&Location::from_degrees("Elko", "NV", 40.8324, -115.7631)));
    }

    #[test]
    fn distance_is_symmetric() {
        let reno = Location::from_degrees("Reno", "NV", 39.5296, -119.8138);
        let elko = Location::from_degrees("Elko", "NV", 40.8324, -115.7631);

        assert!((reno.distance_to(&elko) - elko.distance_to(&reno)).abs() < 1e-9);
        assert!(reno.distance_to(&reno).abs() < 1e-9);
    }
}
