//! Database error types.

use std::path::PathBuf;

/// Why a single database row was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Row has too few or too many fields
    #[error("expected 4 or 5 fields, found {0}")]
    FieldCount(usize),

    /// A required text field is blank
    #[error("{0} is empty")]
    EmptyField(&'static str),

    /// Latitude or longitude is not a finite number
    #[error("invalid {field} {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    /// The CSV reader could not decode the row
    #[error("malformed CSV: {0}")]
    Csv(String),
}

/// A rejected database row. Non-fatal: the loader logs it and moves on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("error parsing line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number in the source.
    pub line: u64,
    #[source]
    pub reason: RecordError,
}

/// Fatal errors while loading a database.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The database file could not be opened
    #[error("cannot open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the source failed part way through
    #[error("I/O error reading database: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors resolving a "Name, Region" query against the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Query is well-formed but no such city exists
    #[error("query city \"{query}\" not found in database")]
    NotFound { query: String },

    /// Query is not of the form "Name, Region"
    #[error("invalid city query \"{query}\": expected \"Name, Region\"")]
    InvalidQuery { query: String },
}
