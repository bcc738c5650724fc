//! KML export for Google Earth / Google Maps.

use askama::Template;

use super::{RenderError, Waypoint, waypoints};
use crate::domain::Location;

/// KML document with one placemark per stop and a line through them all.
#[derive(Template)]
#[template(path = "route.kml", escape = "xml")]
pub struct KmlTemplate {
    pub title: String,
    pub placemarks: Vec<PlacemarkView>,
    /// Space-separated coordinates of every stop, for the route line.
    pub path: String,
}

/// Placemark view model for the template.
#[derive(Debug, Clone)]
pub struct PlacemarkView {
    pub day: usize,
    pub name: String,
    pub region: String,
    /// `lon,lat` in degrees. KML puts longitude first.
    pub coordinates: String,
}

impl From<&Waypoint> for PlacemarkView {
    fn from(wp: &Waypoint) -> Self {
        Self {
            day: wp.day,
            name: wp.name.clone(),
            region: wp.region.clone(),
            coordinates: format!("{:.6},{:.6}", wp.longitude, wp.latitude),
        }
    }
}

impl KmlTemplate {
    pub fn new(title: impl Into<String>, waypoints: &[Waypoint]) -> Self {
        let placemarks: Vec<PlacemarkView> = waypoints.iter().map(PlacemarkView::from).collect();
        let path = placemarks
            .iter()
            .map(|p| p.coordinates.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            title: title.into(),
            placemarks,
            path,
        }
    }
}

/// Render stops as a KML document.
pub fn render_kml<'a>(
    title: &str,
    stops: impl IntoIterator<Item = &'a Location>,
) -> Result<String, RenderError> {
    Ok(KmlTemplate::new(title, &waypoints(stops)).render()?)
}
