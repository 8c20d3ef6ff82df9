//! Loads the airport reference table.
//!
//! The table is a CSV file with a header row. Four columns are required,
//! in any order, alongside any number of extra columns:
//!
//! | column      | meaning                         |
//! |-------------|---------------------------------|
//! | `X`         | longitude, degrees              |
//! | `Y`         | latitude, degrees               |
//! | `NAME`      | airport name                    |
//! | `GLOBAL_ID` | external identifier (any text)  |
//!
//! Whitespace around headers and fields is trimmed. `NaN` and infinite
//! coordinates are rejected.
//!
//! A row that cannot be parsed fails the whole load. Skipping it would
//! quietly change which airport is closest.

use std::{fs::File, io::Read, path::Path};

use crate::{airport::AirportRecord, error::LoadError};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["X", "Y", "NAME", "GLOBAL_ID"];

/// Raw row as it appears in the file.
#[derive(Debug, serde::Deserialize)]
struct AirportRow {
    #[serde(rename = "X")]
    longitude: f64,
    #[serde(rename = "Y")]
    latitude: f64,
    #[serde(rename = "NAME")]
    name: String,
    #[serde(rename = "GLOBAL_ID")]
    global_id: String,
}

impl From<AirportRow> for AirportRecord {
    fn from(row: AirportRow) -> Self {
        AirportRecord::new(row.longitude, row.latitude, row.name, row.global_id)
    }
}

/// Load airports from the CSV file at `path`, in file order.
pub fn load_airports(path: impl AsRef<Path>) -> Result<Vec<AirportRecord>, LoadError> {
    let path = path.as_ref();
    info!("Loading airports from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_airports_from_reader(file)
}

/// Load airports from any CSV source, in input order.
pub fn load_airports_from_reader(reader: impl Read) -> Result<Vec<AirportRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::MalformedRecord { row: 0, source })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            error!("Missing column {}", column);
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut airports = Vec::new();
    for (index, result) in reader.deserialize::<AirportRow>().enumerate() {
        let row = result.map_err(|source| LoadError::MalformedRecord {
            row: index + 1,
            source,
        })?;
        trace!("row {}: {:?}", index + 1, row);
        if !row.longitude.is_finite() || !row.latitude.is_finite() {
            error!("Non-finite coordinate at row {}", index + 1);
            return Err(LoadError::NonFiniteCoordinate { row: index + 1 });
        }
        airports.push(AirportRecord::from(row));
    }

    info!("Loaded {} airports", airports.len());
    Ok(airports)
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    const AIRPORTS_CSV: &str = "\
OBJECTID,X,Y,NAME,GLOBAL_ID
1,-71.0,42.5,A,1
2,-71.2,42.0,B,2
3,-70.9,41.9,C with spaces,5A4B-11
";

    #[test]
    fn test_load_in_file_order() {
        let airports = load_airports_from_reader(AIRPORTS_CSV.as_bytes()).unwrap();
        assert_eq!(airports.len(), 3);
        assert_eq!(airports[0], AirportRecord::new(-71.0, 42.5, "A", "1"));
        assert_eq!(airports[1].name(), "B");
        assert_eq!(airports[2].name(), "C with spaces");
        assert_eq!(airports[2].global_id(), "5A4B-11");
    }

    #[test]
    fn test_column_order_is_free() {
        let csv = "GLOBAL_ID,NAME,Y,X\n7,Logan,42.36,-71.01\n";
        let airports = load_airports_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(airports, vec![AirportRecord::new(-71.01, 42.36, "Logan", "7")]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let airports = load_airports_from_reader("X,Y,NAME,GLOBAL_ID\n".as_bytes()).unwrap();
        assert!(airports.is_empty());
    }

    #[test]
    fn test_malformed_number_reports_row() {
        let csv = "X,Y,NAME,GLOBAL_ID\n-71.0,42.5,A,1\nnot-a-number,42.0,B,2\n";
        let err = load_airports_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedRecord { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let csv = "X,Y,NAME,GLOBAL_ID\nNaN,42.5,A,1\n-71.2,42.0,B,2\n";
        let err = load_airports_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NonFiniteCoordinate { row: 1 }));

        let csv = "X,Y,NAME,GLOBAL_ID\n-71.2,42.0,B,2\n-71.0,inf,A,1\n";
        let err = load_airports_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NonFiniteCoordinate { row: 2 }));

        let csv = "X,Y,NAME,GLOBAL_ID\n-inf,42.0,B,2\n";
        let err = load_airports_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NonFiniteCoordinate { row: 1 }));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let csv = "X,Y,NAME,GLOBAL_ID\n-71.0,42.5\n";
        let err = load_airports_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { row: 1, .. }));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let csv = "X, Y, NAME, GLOBAL_ID\n -71.0, 42.5, A, 1\n";
        let airports = load_airports_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(airports, vec![AirportRecord::new(-71.0, 42.5, "A", "1")]);
    }

    #[test]
    fn test_missing_column() {
        let csv = "X,Y,NAME\n-71.0,42.5,A\n";
        let err = load_airports_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("GLOBAL_ID")));
    }

    #[test]
    fn test_missing_file() {
        let err = load_airports("does/not/exist/Airports.csv").unwrap_err();
        match err {
            LoadError::Io { path, .. } => {
                assert_eq!(path, Path::new("does/not/exist/Airports.csv"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("airports_{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, AIRPORTS_CSV).unwrap();
        let airports = load_airports(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(airports.len(), 3);
    }
}
