//! Road trip planner.
//!
//! Plans a multi-day road trip between two cities from a CSV database of
//! city coordinates, stopping each night at the city within a day's drive
//! that is closest to the destination.

pub mod database;
pub mod domain;
pub mod error;
pub mod planner;
pub mod render;
