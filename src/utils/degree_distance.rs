//! Planar distance between two locations, measured in degrees.
//!
//! This is a flat-earth approximation: latitude and longitude are treated
//! as Cartesian coordinates and the result is scaled to meters with the
//! length of one degree of arc at the equator. It is not a great-circle
//! distance and gets worse the further a pair of points is from the
//! equator.

use crate::location::Location;

/// Meters per degree of arc at the equator.
pub const METERS_PER_DEGREE: f64 = 111194.926644559;

/// Euclidean distance between `a` and `b` on raw degree values.
pub fn distance(a: &Location, b: &Location) -> f64 {
    let delta_lat = (a.latitude.into_inner() - b.latitude.into_inner()).abs();
    let delta_lon = (a.longitude.into_inner() - b.longitude.into_inner()).abs();
    (delta_lat.powi(2) + delta_lon.powi(2)).sqrt()
}

/// Converts a degree distance to meters.
pub fn to_meters(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE
}
