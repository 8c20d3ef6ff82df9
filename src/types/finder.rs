//! The core of the airport library.
//!
//! A [`NearestAirportFinder`] borrows a collection of airports and answers
//! "which airport is closest to this point" with a linear scan.

use crate::{
    airport::AirportRecord,
    degree_distance::{distance, to_meters},
    error::FinderError,
    location::Location,
};

/// The closest airport to a query point, together with the distance to
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestAirport<'a> {
    /// The matched record, borrowed from the searched collection.
    pub airport: &'a AirportRecord,

    /// Planar distance in degrees. See
    /// [`degree_distance`](crate::degree_distance).
    pub distance_degrees: f64,

    /// `distance_degrees` scaled by
    /// [`METERS_PER_DEGREE`](crate::degree_distance::METERS_PER_DEGREE).
    pub distance_meters: f64,
}

impl ClosestAirport<'_> {
    pub fn longitude(&self) -> f64 {
        self.airport.longitude()
    }

    pub fn latitude(&self) -> f64 {
        self.airport.latitude()
    }

    pub fn name(&self) -> &str {
        self.airport.name()
    }

    pub fn global_id(&self) -> &str {
        self.airport.global_id()
    }
}

impl std::fmt::Display for ClosestAirport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:?}, {:?}, {:?}, '{}', '{}']",
            self.distance_meters,
            self.longitude(),
            self.latitude(),
            self.name(),
            self.global_id()
        )
    }
}

/// Finds the nearest airport out of a fixed, read-only collection.
///
/// The finder only holds a shared borrow, so any number of callers may
/// query the same collection at once.
#[derive(Debug, Clone, Copy)]
pub struct NearestAirportFinder<'a> {
    airports: &'a [AirportRecord],
}

impl<'a> NearestAirportFinder<'a> {
    /// Creates a new finder over the given airports.
    pub fn new(airports: &'a [AirportRecord]) -> NearestAirportFinder<'a> {
        debug!("Creating finder over {} airports", airports.len());
        NearestAirportFinder { airports }
    }

    /// Borrow the searched collection.
    pub fn airports(&self) -> &'a [AirportRecord] {
        self.airports
    }

    /// Return the number of airports in the collection.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Find the airport closest to a point.
    ///
    /// # Arguments
    /// * `query_lat` - Latitude of the query point, in degrees.
    /// * `query_lon` - Longitude of the query point, in degrees.
    ///
    /// Arguments are taken latitude first, while
    /// [`AirportRecord::new`] takes longitude first.
    ///
    /// # Returns
    /// The closest airport. When several airports are equally close, the
    /// one that comes first in the collection wins.
    ///
    /// # Errors
    /// [`FinderError::EmptyCollection`] if there are no airports.
    /// [`FinderError::NoComparableAirport`] if no airport is at a finite
    /// distance, which happens for a NaN or infinite query.
    ///
    /// # Time Complexity
    /// *O*(*n*) in the number of airports.
    pub fn find_closest_airport(
        &self,
        query_lat: f64,
        query_lon: f64,
    ) -> Result<ClosestAirport<'a>, FinderError> {
        self.find_closest_to(&Location::from_lat_lon(query_lat, query_lon))
    }

    /// Same as [`find_closest_airport`](Self::find_closest_airport), for
    /// a query already expressed as a [`Location`].
    pub fn find_closest_to(&self, query: &Location) -> Result<ClosestAirport<'a>, FinderError> {
        info!("Finding closest airport");
        debug!("query: {:?}", query);
        if self.airports.is_empty() {
            error!("No airports to search");
            return Err(FinderError::EmptyCollection);
        }

        let mut closest_index = 0;
        let mut closest_distance = f64::INFINITY;
        for (index, airport) in self.airports.iter().enumerate() {
            let new_distance = distance(query, airport.location());
            trace!("airport {}: {}", airport.global_id(), new_distance);
            if new_distance < closest_distance {
                closest_distance = new_distance;
                closest_index = index;
            }
        }

        if !closest_distance.is_finite() {
            error!("No airport at a finite distance from {:?}", query);
            return Err(FinderError::NoComparableAirport);
        }

        let closest = ClosestAirport {
            airport: &self.airports[closest_index],
            distance_degrees: closest_distance,
            distance_meters: to_meters(closest_distance),
        };
        debug!("closest: {:?}", closest);
        Ok(closest)
    }
}

/// Find the airport in `airports` closest to (`query_lat`, `query_lon`).
///
/// See [`NearestAirportFinder::find_closest_airport`].
pub fn find_closest_airport(
    airports: &[AirportRecord],
    query_lat: f64,
    query_lon: f64,
) -> Result<ClosestAirport<'_>, FinderError> {
    NearestAirportFinder::new(airports).find_closest_airport(query_lat, query_lon)
}
