//! Shared test data: a small street network with a short but hilly direct
//! route, two flatter detours which tie on elevation cost, a longer detour,
//! a flat spur and a disconnected pair of nodes.

use std::cell::Cell;

use crate::common::config::EdgeAttribute;
use crate::common::coords::Coordinate;
use crate::common::error::Result;
use crate::common::graph_data::{EdgeData, NodeData};
use crate::geocoding::{GeoCoder, StaticGeoCoder};
use crate::graph::petgraph::PetgraphProvider;
use crate::graph::provider::{GraphProvider, NodePath, PathIter};

pub const ORIGIN: &str = "Origin Street";
pub const DESTINATION: &str = "Destination Avenue";
pub const FLAT_START: &str = "Flat Start";
pub const FLAT_END: &str = "Flat End";
pub const ISLAND: &str = "Island Lane";

fn node(id: i64, lat: f64, lon: f64, elevation: f64) -> NodeData {
    NodeData {
        id,
        lat,
        lon,
        elevation,
    }
}

fn edge(
    src: i64,
    dst: i64,
    length: f64,
    elevation_gain: f64,
    elevation_cost: f64,
) -> EdgeData {
    EdgeData {
        src,
        dst,
        length,
        elevation_gain,
        elevation_cost,
    }
}

pub fn get_test_nodes() -> Vec<NodeData> {
    vec![
        node(1, 42.3900, -72.5300, 60.0),
        node(2, 42.3905, -72.5250, 90.0),
        node(3, 42.3910, -72.5200, 110.0),
        node(4, 42.3950, -72.5250, 75.0),
        node(5, 42.3850, -72.5250, 50.0),
        node(6, 42.4200, -72.4800, 100.0),
        node(7, 42.4210, -72.4790, 100.0),
        node(8, 42.3930, -72.5350, 70.0),
        node(9, 42.3800, -72.5400, 40.0),
        node(10, 42.3800, -72.5380, 40.0),
    ]
}

/// Paths from 1 to 3:
/// - 1 -> 2 -> 3: 1000m, 50m gain, cost 150 (shortest by length)
/// - 1 -> 5 -> 3: 1050m, 20m gain, cost 50
/// - 1 -> 4 -> 3: 1100m, 20m gain, cost 50
/// - 1 -> 8 -> 3: 1300m, 20m gain, cost 120
pub fn get_test_edges() -> Vec<EdgeData> {
    vec![
        edge(1, 2, 500.0, 30.0, 80.0),
        edge(2, 3, 500.0, 20.0, 70.0),
        edge(1, 4, 600.0, 15.0, 30.0),
        edge(4, 3, 500.0, 5.0, 20.0),
        edge(1, 5, 550.0, -10.0, 25.0),
        edge(5, 3, 500.0, 20.0, 25.0),
        edge(1, 8, 700.0, 10.0, 60.0),
        edge(8, 3, 600.0, 10.0, 60.0),
        edge(6, 7, 150.0, 0.0, 150.0),
        edge(9, 10, 200.0, 0.0, 200.0),
    ]
}

pub fn get_test_provider() -> PetgraphProvider {
    PetgraphProvider::from_data(get_test_nodes(), get_test_edges())
}

/// Each address sits exactly on top of one of the test nodes
pub fn get_test_geocoder() -> StaticGeoCoder {
    StaticGeoCoder::from_iter([
        (ORIGIN, Coordinate::new(42.3900, -72.5300)),
        (DESTINATION, Coordinate::new(42.3910, -72.5200)),
        (FLAT_START, Coordinate::new(42.3800, -72.5400)),
        (FLAT_END, Coordinate::new(42.3800, -72.5380)),
        (ISLAND, Coordinate::new(42.4210, -72.4790)),
    ])
}

/// Wraps the test geocoder, keeping count of how many lookups were made
#[derive(Default)]
pub struct CountingGeoCoder {
    pub calls: Cell<usize>,
}

impl GeoCoder for CountingGeoCoder {
    fn resolve(&self, address: &str) -> Result<Coordinate> {
        self.calls.set(self.calls.get() + 1);
        get_test_geocoder().resolve(address)
    }
}

/// Graph provider which fails the test if it is ever used
pub struct UnreachableProvider;

impl GraphProvider for UnreachableProvider {
    fn nearest_node(&self, _coords: &Coordinate) -> Result<i64> {
        panic!("nearest_node should not have been called")
    }

    fn shortest_path(
        &self,
        _from: i64,
        _to: i64,
        _weight: EdgeAttribute,
    ) -> Result<NodePath> {
        panic!("shortest_path should not have been called")
    }

    fn all_shortest_paths<'a>(
        &'a self,
        _from: i64,
        _to: i64,
        _weight: EdgeAttribute,
    ) -> Result<PathIter<'a>> {
        panic!("all_shortest_paths should not have been called")
    }

    fn edge_attribute(
        &self,
        _path: &[i64],
        _attribute: EdgeAttribute,
    ) -> Result<Vec<f64>> {
        panic!("edge_attribute should not have been called")
    }
}
