//! Generates random airports around a location.

use rand::Rng;
use uuid::Uuid;

use crate::{airport::AirportRecord, location::Location};

/// Generate `capacity` airports uniformly distributed within
/// `radius_degrees` of `location`.
///
/// Airports are named `airport_0`, `airport_1`, ... and get a random
/// UUID as their global id.
pub fn generate_airports_near(
    location: &Location,
    radius_degrees: f64,
    capacity: usize,
) -> Vec<AirportRecord> {
    let mut rng = rand::thread_rng();
    let mut airports = Vec::with_capacity(capacity);
    for index in 0..capacity {
        // sqrt keeps the density uniform over the disc
        let r = radius_degrees * rng.gen::<f64>().sqrt();
        let theta = rng.gen_range(0.0..std::f64::consts::TAU);
        airports.push(AirportRecord::new(
            location.longitude.into_inner() + r * theta.cos(),
            location.latitude.into_inner() + r * theta.sin(),
            format!("airport_{}", index),
            Uuid::new_v4().to_string(),
        ));
    }
    airports
}
