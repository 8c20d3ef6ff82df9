//! Nearest Airport Library.
//! Finds the closest airport to a coordinate from a reference table.
//!
//! The airport collection is loaded once (see [`loader`]) and handed to a
//! [`NearestAirportFinder`](finder::NearestAirportFinder), which answers
//! queries with a linear scan over planar degree distances.

#[macro_use]
extern crate log;

pub mod cli;
pub mod logging;

pub mod types {
    pub mod airport;
    pub mod error;
    pub mod finder;
    pub mod location;
}

pub mod utils {
    pub mod degree_distance;
    pub mod generator;
    pub mod loader;
}

pub use types::*;
pub use utils::*;
