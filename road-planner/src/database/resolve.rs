//! Free-text city lookup.

use tracing::info;

use super::{Database, LookupError};
use crate::domain::Location;

impl Database {
    /// Resolve a `"Name, Region"` query to a city.
    ///
    /// Whitespace around the comma is ignored. Matching is exact and
    /// case-sensitive on both parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use road_planner::database::Database;
    /// use road_planner::domain::Location;
    ///
    /// let db = Database::from_locations([
    ///     Location::from_degrees("Boston", "MA", 42.3601, -71.0589),
    /// ]);
    ///
    /// assert_eq!(db.resolve("Boston ,  MA").unwrap().name(), "Boston");
    /// assert!(db.resolve("Boston, NY").is_err());
    /// ```
    pub fn resolve(&self, query: &str) -> Result<&Location, LookupError> {
        let (name, region) = parse_query(query)?;

        let city = self.get(name, region).ok_or_else(|| LookupError::NotFound {
            query: format!("{name}, {region}"),
        })?;

        info!("Matched {city} to database");
        Ok(city)
    }
}

/// Split a query into trimmed `(name, region)`.
fn parse_query(query: &str) -> Result<(&str, &str), LookupError> {
    let invalid = || LookupError::InvalidQuery {
        query: query.to_string(),
    };

    let (name, region) = query.split_once(',').ok_or_else(invalid)?;
    let (name, region) = (name.trim(), region.trim());

    if region.contains(',') || name.is_empty() || region.is_empty() {
        return Err(invalid());
    }

    Ok((name, region))
}
