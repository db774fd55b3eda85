//! Defines the coordinate pair returned by geocoding, which is used to look
//! up the closest node in the street network

use geo::Point;
use serde::{Deserialize, Serialize};

/// A latitude & longitude pair. Serialized as `[lat, lon]` so that it can be
/// dropped straight into most web map libraries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "(f64, f64)", from = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Build a coordinate from a `(lat, lon)` tuple
    fn from((lat, lon): (f64, f64)) -> Self {
        Coordinate { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coords: Coordinate) -> Self {
        (coords.lat, coords.lon)
    }
}

impl From<Coordinate> for Point {
    /// geo works in (x, y) order, so longitude comes first
    fn from(coords: Coordinate) -> Self {
        Point::new(coords.lon, coords.lat)
    }
}
