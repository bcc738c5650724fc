//! Route output formats.
//!
//! Routes are stored in radians; every renderer here works from
//! [`Waypoint`]s, which carry coordinates converted back to degrees.

mod geojson;
mod kml;
mod text;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::Location;

pub use geojson::render_geojson;
pub use kml::{KmlTemplate, PlacemarkView, render_kml};
pub use text::render_text;

/// Errors producing or writing rendered output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template rendering failed
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A stop prepared for export, with coordinates in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub day: usize,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(day: usize, location: &Location) -> Self {
        let (latitude, longitude) = location.point().to_degrees();
        Self {
            day,
            name: location.name().to_string(),
            region: location.region().to_string(),
            latitude,
            longitude,
        }
    }
}

/// Number stops by day, starting at day 0.
pub fn waypoints<'a>(stops: impl IntoIterator<Item = &'a Location>) -> Vec<Waypoint> {
    stops
        .into_iter()
        .enumerate()
        .map(|(day, location)| Waypoint::new(day, location))
        .collect()
}

/// Write rendered output to a file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
