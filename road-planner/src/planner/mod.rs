//! Road trip planner using greedy best-first search.
//!
//! This module implements the core route construction algorithm that
//! answers: "Driving at most this far each day, where do I stop each night
//! on the way from here to there?"
//!
//! Each day the planner moves to whichever city in range is closest to the
//! finish. It does not look for the shortest route and never backtracks.

mod config;
mod neighbors;
mod search;

pub use config::{ConfigError, PlannerConfig};
pub use neighbors::neighbors;
pub use search::{PlanError, RoutePlanner, RouteSearch, SearchStatus};
