//! Multi-leg trips.
//!
//! An `Itinerary` chains routes through user-chosen intermediate stops.
//! Each leg is planned independently, so a city may appear in more than
//! one leg; within a leg, the route invariants still hold.

use super::{DomainError, Location, Route};

/// A trip made of one or more connected legs.
///
/// # Invariants
///
/// - At least one leg
/// - Each leg starts where the previous one finished
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Route>,
}

impl Itinerary {
    /// Constructs an itinerary from legs, validating that they connect.
    pub fn new(legs: Vec<Route>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for pair in legs.windows(2) {
            if pair[0].finish() != pair[1].start() {
                return Err(DomainError::LegsNotConnected(
                    pair[0].finish().to_string(),
                    pair[1].start().to_string(),
                ));
            }
        }

        Ok(Self { legs })
    }

    pub fn legs(&self) -> &[Route] {
        &self.legs
    }

    /// All stops in travel order, with each junction listed once.
    pub fn stops(&self) -> Vec<&Location> {
        let mut stops: Vec<&Location> = vec![self.legs[0].start()];
        for leg in &self.legs {
            stops.extend(leg.stops().iter().skip(1));
        }
        stops
    }

    /// Number of travel days across all legs.
    pub fn days(&self) -> usize {
        self.legs.iter().map(Route::days).sum()
    }

    /// Total great-circle distance covered, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().map(Route::total_distance_km).sum()
    }
}

impl From<Route> for Itinerary {
    fn from(route: Route) -> Self {
        Self { legs: vec![route] }
    }
}
