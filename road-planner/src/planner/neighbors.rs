//! Spatial neighbor search.

use crate::domain::Location;

/// Cities within `radius_km` of `origin`, in the order of `candidates`.
///
/// The result is lazy and computed fresh on every call. `origin` itself is
/// not excluded: it is at distance zero, so it matches whenever the radius
/// is non-negative. Callers that need to skip already-visited cities must
/// filter the output themselves.
pub fn neighbors<'a, I>(
    origin: &'a Location,
    candidates: I,
    radius_km: f64,
) -> impl Iterator<Item = &'a Location>
where
    I: IntoIterator<Item = &'a Location>,
{
    candidates
        .into_iter()
        .filter(move |candidate| origin.distance_to(candidate) <= radius_km)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn location() -> impl Strategy<Value = Location> {
        (-60.0f64..60.0, -180.0f64..180.0)
            .prop_map(|(lat, lon)| Location::from_degrees("c", "XX", lat, lon))
    }

    proptest! {
        /// Output is exactly the candidates within the radius, in order
        #[test]
        fn exact_subset(
            origin in location(),
            cities in proptest::collection::vec(location(), 0..30),
            radius in 0.0f64..5000.0,
        ) {
            let found: Vec<&Location> = neighbors(&origin, &cities, radius).collect();
            let expected: Vec<&Location> = cities
                .iter()
                .filter(|c| origin.distance_to(c) <= radius)
                .collect();
            prop_assert_eq!(found, expected);
        }
    }
}
