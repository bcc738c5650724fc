//! GeoJSON export (RFC 7946).
//!
//! Produces a `FeatureCollection` with a `Point` per stop and, when there is
//! more than one stop, a `LineString` for the whole route. Positions are
//! `[longitude, latitude]` in degrees.

use serde::Serialize;

use super::{RenderError, Waypoint, waypoints};
use crate::domain::Location;

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Document {
    FeatureCollection { features: Vec<Feature> },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Feature {
    Feature {
        geometry: Geometry,
        properties: Properties,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Properties {
    Stop {
        day: usize,
        name: String,
        region: String,
    },
    Route {
        days: usize,
        distance_km: f64,
    },
}

fn position(wp: &Waypoint) -> [f64; 2] {
    [wp.longitude, wp.latitude]
}

/// Render stops as a pretty-printed GeoJSON document.
pub fn render_geojson<'a>(
    stops: impl IntoIterator<Item = &'a Location>,
) -> Result<String, RenderError> {
    let stops: Vec<&Location> = stops.into_iter().collect();
    let wps = waypoints(stops.iter().copied());

    let mut features: Vec<Feature> = wps
        .iter()
        .map(|wp| Feature::Feature {
            geometry: Geometry::Point(position(wp)),
            properties: Properties::Stop {
                day: wp.day,
                name: wp.name.clone(),
                region: wp.region.clone(),
            },
        })
        .collect();

    if wps.len() > 1 {
        let distance_km = stops
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum();

        features.push(Feature::Feature {
            geometry: Geometry::LineString(wps.iter().map(position).collect()),
            properties: Properties::Route {
                days: wps.len() - 1,
                distance_km,
            },
        });
    }

    let document = Document::FeatureCollection { features };
    Ok(serde_json::to_string_pretty(&document)?)
}
