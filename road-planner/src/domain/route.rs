//! Route types.
//!
//! A `Route` is the day-by-day sequence of overnight stops produced by the
//! planner, from start to finish.

use std::collections::HashSet;

use super::{DomainError, Location};

/// An ordered sequence of stops, one per day of travel.
///
/// # Invariants
///
/// - At least one stop (the start)
/// - No location appears twice
///
/// The number of travel days is one less than the number of stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<Location>,
}

impl Route {
    /// Constructs a route, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRoute` if `stops` is empty and
    /// `DomainError::DuplicateStop` if any location repeats.
    pub fn new(stops: Vec<Location>) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if !seen.insert(stop) {
                return Err(DomainError::DuplicateStop(stop.to_string()));
            }
        }

        Ok(Self { stops })
    }

    /// A route that starts and ends at the same place.
    pub fn single(stop: Location) -> Self {
        Self { stops: vec![stop] }
    }

    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<Location> {
        self.stops
    }

    /// Number of stops, including start and finish.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: a route has at least one stop.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of travel days.
    pub fn days(&self) -> usize {
        self.stops.len() - 1
    }

    pub fn start(&self) -> &Location {
        &self.stops[0]
    }

    pub fn finish(&self) -> &Location {
        &self.stops[self.stops.len() - 1]
    }

    /// Distance travelled on each day, in kilometres.
    pub fn daily_distances(&self) -> Vec<f64> {
        self.stops
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .collect()
    }

    /// Total great-circle distance covered, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.daily_distances().iter().sum()
    }
}
