//! Database row schema.
//!
//! Each row is `name, [county,] region, latitude, longitude` with
//! coordinates in degrees. The county column is optional and only kept
//! for diagnostics.

use csv::StringRecord;

use super::error::RecordError;
use crate::domain::Location;

/// A validated database row.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub name: String,
    pub county: Option<String>,
    pub region: String,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

impl CityRecord {
    /// Validate a raw CSV row.
    pub fn from_record(record: &StringRecord) -> Result<Self, RecordError> {
        let fields: Vec<&str> = record.iter().collect();
        Self::from_fields(&fields)
    }

    /// Validate a row already split into fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        let (name, county, region, lat, lon) = match *fields {
            [name, region, lat, lon] => (name, None, region, lat, lon),
            [name, county, region, lat, lon] => (name, Some(county), region, lat, lon),
            _ => return Err(RecordError::FieldCount(fields.len())),
        };

        let name = required("name", name)?;
        let region = required("region", region)?;
        let latitude = coordinate("latitude", lat)?;
        let longitude = coordinate("longitude", lon)?;

        Ok(Self {
            name,
            county: county
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            region,
            latitude,
            longitude,
        })
    }

    /// Convert to a location, moving the coordinates into radians.
    pub fn into_location(self) -> Location {
        Location::from_degrees(self.name, self.region, self.latitude, self.longitude)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, RecordError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RecordError::EmptyField(field));
    }
    Ok(value.to_string())
}

fn coordinate(field: &'static str, value: &str) -> Result<f64, RecordError> {
    let invalid = || RecordError::InvalidCoordinate {
        field,
        value: value.to_string(),
    };

    let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !parsed.is_finite() {
        return Err(invalid());
    }
    Ok(parsed)
}
