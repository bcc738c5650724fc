//! Domain error types.
//!
//! These errors represent invariant violations when assembling routes and
//! itineraries. They are distinct from database and I/O errors.

/// Domain-level errors for route construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stops
    #[error("route must have at least one stop")]
    EmptyRoute,

    /// A location appears twice in the same route
    #[error("route visits {0} more than once")]
    DuplicateStop(String),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't share their junction
    #[error("leg ending at {0} does not connect to leg starting at {1}")]
    LegsNotConnected(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one stop");

        let err = DomainError::DuplicateStop("Reno, NV".into());
        assert_eq!(err.to_string(), "route visits Reno, NV more than once");

        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one leg");

        let err = DomainError::LegsNotConnected("Reno, NV".into(), "Elko, NV".into());
        assert_eq!(
            err.to_string(),
            "leg ending at Reno, NV does not connect to leg starting at Elko, NV"
        );
    }
}
