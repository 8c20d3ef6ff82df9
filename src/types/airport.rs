//! Struct definitions and implementations for [`AirportRecord`].
//!
//! An airport is a named [`Location`] with an external identifier. The
//! collection of airports is created once and only ever borrowed after
//! that, so every field is private and exposed through getters.

use super::location::Location;

/// A single row of the airport reference table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportRecord {
    /// Denotes the geographical position of the airport.
    location: Location,

    /// Human readable airport name.
    name: String,

    /// Opaque identifier from the source table. Numeric identifiers are
    /// kept in their textual form.
    global_id: String,
}

impl AirportRecord {
    /// Creates a new record. Note that the coordinates are taken in
    /// (longitude, latitude) order, matching the column order of the
    /// source table.
    pub fn new(
        longitude: f64,
        latitude: f64,
        name: impl Into<String>,
        global_id: impl Into<String>,
    ) -> AirportRecord {
        AirportRecord {
            location: Location::from_lat_lon(latitude, longitude),
            name: name.into(),
            global_id: global_id.into(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude.into_inner()
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude.into_inner()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn global_id(&self) -> &str {
        &self.global_id
    }
}

#[cfg(test)]
mod airport_tests {
    use super::*;

    #[test]
    fn test_new_takes_longitude_first() {
        let airport = AirportRecord::new(-71.0, 42.5, "A", "1");
        assert_eq!(airport.longitude(), -71.0);
        assert_eq!(airport.latitude(), 42.5);
        assert_eq!(airport.name(), "A");
        assert_eq!(airport.global_id(), "1");
    }

    #[test]
    fn test_duplicates_compare_equal() {
        let first = AirportRecord::new(-71.0, 42.5, "A", "1");
        let second = AirportRecord::new(-71.0, 42.5, "A", "1");
        assert_eq!(first, second);
    }
}
