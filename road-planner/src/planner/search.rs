//! Greedy route search.
//!
//! Builds a route one day at a time. From the current city, every city
//! within a day's drive is ranked by its remaining distance to the finish,
//! and the closest one not yet visited becomes the next stop. There is no
//! backtracking: if every reachable city has already been visited, the
//! search fails even when some other route exists.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::database::Database;
use crate::domain::{DomainError, Itinerary, Location, Route};

use super::config::PlannerConfig;
use super::neighbors::neighbors;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Every city in range has already been visited
    #[error("no viable route after {stops} stops, stuck at {name}, {region}")]
    RouteNotFound {
        stops: usize,
        name: String,
        region: String,
    },

    /// Invalid planning request
    #[error("invalid planning request: {0}")]
    InvalidRequest(String),

    /// Assembled route broke a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Where a search currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    /// The finish has not been reached yet.
    InProgress,
    /// The current city is the finish.
    Succeeded,
    /// No unvisited city was in range.
    Failed(PlanError),
}

/// A single greedy search, advanced one day at a time.
///
/// [`RoutePlanner::plan`] drives this to completion. Hosts that need to
/// interrupt long searches can call [`RouteSearch::step`] themselves and
/// check for cancellation between steps.
pub struct RouteSearch<'a> {
    database: &'a Database,
    finish: &'a Location,
    max_daily_km: f64,
    route: Vec<&'a Location>,
    visited: HashSet<&'a Location>,
    status: SearchStatus,
}

impl<'a> RouteSearch<'a> {
    /// Start a search at `start`.
    pub fn new(
        database: &'a Database,
        start: &'a Location,
        finish: &'a Location,
        max_daily_km: f64,
    ) -> Self {
        let status = if start == finish {
            SearchStatus::Succeeded
        } else {
            SearchStatus::InProgress
        };

        Self {
            database,
            finish,
            max_daily_km,
            route: vec![start],
            visited: HashSet::from([start]),
            status,
        }
    }

    /// The city the route currently ends at.
    pub fn current(&self) -> &'a Location {
        self.route[self.route.len() - 1]
    }

    /// Number of stops so far, including the start.
    pub fn stops(&self) -> usize {
        self.route.len()
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// Advance by one day.
    ///
    /// Does nothing once the search has succeeded or failed.
    pub fn step(&mut self) -> &SearchStatus {
        if self.status != SearchStatus::InProgress {
            return &self.status;
        }

        let current = self.current();
        let finish = self.finish;

        let mut ranked: Vec<(f64, &'a Location)> =
            neighbors(current, self.database.locations(), self.max_daily_km)
                .map(|city| (city.distance_to(finish), city))
                .collect();
        ranked.sort_by(|a, b| by_goal_distance(*a, *b));

        let next = ranked
            .into_iter()
            .map(|(_, city)| city)
            .find(|city| !self.visited.contains(city));

        match next {
            None => {
                self.status = SearchStatus::Failed(PlanError::RouteNotFound {
                    stops: self.route.len(),
                    name: current.name().to_string(),
                    region: current.region().to_string(),
                });
            }
            Some(city) => {
                self.route.push(city);
                self.visited.insert(city);

                debug!(
                    city = %city,
                    remaining_km = city.distance_to(finish),
                    "Added stop to route"
                );

                if city == finish {
                    self.status = SearchStatus::Succeeded;
                }
            }
        }

        &self.status
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<Route, PlanError> {
        loop {
            match self.step() {
                SearchStatus::InProgress => continue,
                SearchStatus::Failed(err) => return Err(err.clone()),
                SearchStatus::Succeeded => break,
            }
        }

        let stops = self.route.into_iter().cloned().collect();
        Ok(Route::new(stops)?)
    }
}

/// Order candidates by remaining distance, then by `(name, region)` so equal
/// distances resolve the same way on every run.
fn by_goal_distance(a: (f64, &Location), b: (f64, &Location)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.key().cmp(&b.1.key()))
}

/// Greedy route planner over a city database.
pub struct RoutePlanner<'a> {
    database: &'a Database,
    config: &'a PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(database: &'a Database, config: &'a PlannerConfig) -> Self {
        Self { database, config }
    }

    /// Begin a search without running it.
    pub fn search(&self, start: &'a Location, finish: &'a Location) -> RouteSearch<'a> {
        RouteSearch::new(self.database, start, finish, self.config.max_daily_km)
    }

    /// Plan a route from `start` to `finish`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RouteNotFound` with the number of stops reached
    /// and the city where the search got stuck.
    pub fn plan(&self, start: &'a Location, finish: &'a Location) -> Result<Route, PlanError> {
        self.search(start, finish).run()
    }

    /// Plan a trip through `waypoints` in order, one leg per consecutive pair.
    ///
    /// The first leg that fails aborts the whole trip.
    pub fn plan_itinerary(&self, waypoints: &[&'a Location]) -> Result<Itinerary, PlanError> {
        if waypoints.len() < 2 {
            return Err(PlanError::InvalidRequest(
                "an itinerary needs a start and a finish".to_string(),
            ));
        }

        let legs = waypoints
            .windows(2)
            .map(|pair| {
                debug!(from = %pair[0], to = %pair[1], "Planning leg");
                self.plan(pair[0], pair[1])
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Itinerary::new(legs)?)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
