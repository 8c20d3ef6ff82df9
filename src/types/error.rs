//! Error types for searching and loading airports.

use std::path::PathBuf;

/// Errors raised by [`NearestAirportFinder`](super::finder::NearestAirportFinder).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FinderError {
    #[error("no airport records available to search")]
    EmptyCollection,

    /// Every distance was NaN or infinite, e.g. for a NaN query.
    #[error("no airport is at a finite distance from the query point")]
    NoComparableAirport,
}

/// Errors raised while loading the airport table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read airport file '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("airport file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("airport record at row {row} has a non-finite coordinate")]
    NonFiniteCoordinate { row: usize },

    /// `row` is the 1-based data row, not counting the header. A broken
    /// header row is reported as row 0.
    #[error("malformed airport record at row {row}: {source}")]
    MalformedRecord { row: usize, source: csv::Error },
}
