//! Domain types for the road trip planner.
//!
//! This module contains the geographic primitives and the route model.
//! Routes and itineraries enforce their invariants at construction time,
//! so code that receives them can trust their validity.

mod error;
mod geo;
mod itinerary;
mod location;
mod route;

pub use error::DomainError;
pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use itinerary::Itinerary;
pub use location::Location;
pub use route::Route;
