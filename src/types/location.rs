//! Struct definitions and implementations for [`Location`].

use ordered_float::OrderedFloat;

/// A [`Location`] is an interface type that represents a geographic
/// position in degrees. Typically, this type is used in tandem with the
/// [`AirportRecord`](`super::airport::AirportRecord`) type.
///
/// Coordinates are wrapped in [`OrderedFloat`] so locations can be
/// compared and hashed. No range validation is performed: a latitude of
/// 200 degrees is stored and measured like any other value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub longitude: OrderedFloat<f64>,
    pub latitude: OrderedFloat<f64>,
}

impl Location {
    /// Builds a location from latitude and longitude, in that order.
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Location {
        Location {
            longitude: OrderedFloat(longitude),
            latitude: OrderedFloat(latitude),
        }
    }
}
