//! City database.
//!
//! Loads a CSV file of cities into an in-memory map keyed by
//! `(name, region)`. Malformed rows are logged and skipped; only failure to
//! read the source at all is fatal.

mod error;
mod record;
mod resolve;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::Location;

pub use error::{LoadError, LookupError, ParseError, RecordError};
pub use record::CityRecord;

/// Read-only collection of cities keyed by `(name, region)`.
///
/// Iteration follows key order, so every run over the same data sees the
/// same candidate order.
#[derive(Debug, Clone, Default)]
pub struct Database {
    cities: BTreeMap<(String, String), Location>,
}

impl Database {
    /// Build a database from locations.
    ///
    /// A later location with the same `(name, region)` replaces an earlier one.
    pub fn from_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut db = Self::default();
        for location in locations {
            db.insert(location);
        }
        db
    }

    fn insert(&mut self, location: Location) -> Option<Location> {
        let key = (location.name().to_string(), location.region().to_string());
        self.cities.insert(key, location)
    }

    /// Look up a city by exact name and region.
    pub fn get(&self, name: &str, region: &str) -> Option<&Location> {
        self.cities.get(&(name.to_string(), region.to_string()))
    }

    /// All cities, in key order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + Clone {
        self.cities.values()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Result of loading a database: the cities plus the rows that were skipped.
#[derive(Debug)]
pub struct LoadOutcome {
    pub database: Database,
    pub skipped: Vec<ParseError>,
}

/// Load a database from a CSV file on disk.
pub fn load_database(path: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_database(file)
}

/// Load a database from any CSV source.
///
/// Rows are `name, [county,] region, latitude, longitude`, without a header.
/// A header line, if present, fails validation like any other bad row and
/// is skipped.
pub fn read_database<R: Read>(reader: R) -> Result<LoadOutcome, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut database = Database::default();
    let mut skipped = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let fallback_line = idx as u64 + 1;

        let parsed = match result {
            Ok(record) => {
                let line = record.position().map_or(fallback_line, |p| p.line());
                CityRecord::from_record(&record).map_err(|reason| ParseError { line, reason })
            }
            Err(err) => {
                if matches!(err.kind(), csv::ErrorKind::Io(_)) {
                    return Err(LoadError::Io(std::io::Error::other(err)));
                }
                let line = err.position().map_or(fallback_line, |p| p.line());
                Err(ParseError {
                    line,
                    reason: RecordError::Csv(err.to_string()),
                })
            }
        };

        match parsed {
            Ok(city) => {
                let location = city.into_location();
                debug!(city = %location, "Added city");
                if let Some(previous) = database.insert(location) {
                    debug!(city = %previous, "Replaced earlier entry with the same key");
                }
            }
            Err(err) => {
                warn!("{err}");
                skipped.push(err);
            }
        }
    }

    info!(
        cities = database.len(),
        skipped = skipped.len(),
        "Read {} cities into a database",
        database.len()
    );

    Ok(LoadOutcome { database, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
city,state,lat,lon
San Francisco,San Francisco,CA,37.7749,-122.4194
Sacramento,CA,38.5816,-121.4944
Reno,Washoe,NV,39.5296,-119.8138
broken row
Nowhere,XX,north,east
";

    #[test]
    fn loads_valid_rows_and_skips_bad_ones() {
        let outcome = read_database(SAMPLE.as_bytes()).unwrap();

        assert_eq!(outcome.database.len(), 3);
        assert_eq!(outcome.skipped.len(), 3);

        let lines: Vec<u64> = outcome.skipped.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 5, 6]);
        assert_eq!(outcome.skipped[1].reason, RecordError::FieldCount(1));
    }

    #[test]
    fn lookup_by_key() {
        let db = read_database(SAMPLE.as_bytes()).unwrap().database;

        let reno = db.get("Reno", "NV").unwrap();
        let (lat, lon) = reno.point().to_degrees();
        assert!((lat - 39.5296).abs() < 1e-9);
        assert!((lon + 119.8138).abs() < 1e-9);

        assert!(db.get("Reno", "CA").is_none());
        assert!(db.get("Washoe", "NV").is_none());
    }

    #[test]
    fn iteration_in_key_order() {
        let db = read_database(SAMPLE.as_bytes()).unwrap().database;

        let names: Vec<&str> = db.locations().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Reno", "Sacramento", "San Francisco"]);
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let csv = "Springfield,IL,39.78,-89.65\nSpringfield,IL,40.0,-89.0\n";
        let db = read_database(csv.as_bytes()).unwrap().database;

        assert_eq!(db.len(), 1);
        let (lat, _) = db.get("Springfield", "IL").unwrap().point().to_degrees();
        assert!((lat - 40.0).abs() < 1e-9);
    }

    #[test]
    fn same_name_different_region_kept_apart() {
        let csv = "Portland,OR,45.5152,-122.6784\nPortland,ME,43.6591,-70.2568\n";
        let db = read_database(csv.as_bytes()).unwrap().database;

        assert_eq!(db.len(), 2);
        assert_ne!(db.get("Portland", "OR"), db.get("Portland", "ME"));
    }

    #[test]
    fn empty_source() {
        let outcome = read_database("".as_bytes()).unwrap();
        assert!(outcome.database.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn quoted_names_with_commas() {
        let csv = "\"Washington, D.C.\",DC,38.9072,-77.0369\n";
        let db = read_database(csv.as_bytes()).unwrap().database;

        assert!(db.get("Washington, D.C.", "DC").is_some());
    }

    #[test]
    fn load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let outcome = load_database(file.path()).unwrap();
        assert_eq!(outcome.database.len(), 3);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        match load_database(&path) {
            Err(LoadError::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn from_locations() {
        let db = Database::from_locations(vec![
            Location::from_degrees("A", "XX", 0.0, 0.0),
            Location::from_degrees("B", "XX", 0.0, 1.0),
        ]);

        assert_eq!(db.len(), 2);
        assert!(!db.is_empty());
        assert!(db.get("A", "XX").is_some());
    }
}
