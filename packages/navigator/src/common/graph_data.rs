use serde::{Deserialize, Serialize};

use crate::common::config::EdgeAttribute;

/// Sets the data which will be stored as weights against each node in the
/// petgraph graph. The ID is the identifier used by the source dataset, and
/// is what will be reported back in any generated paths.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
}

/// Container for edge metadata which will be stored in the graph. The
/// elevation gain may be negative for downhill edges, the length and
/// elevation cost must not be.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub src: i64,
    pub dst: i64,
    pub length: f64,
    pub elevation_gain: f64,
    pub elevation_cost: f64,
}

impl EdgeData {
    /// Fetch the value of the requested attribute for this edge
    pub fn attribute(&self, attribute: EdgeAttribute) -> f64 {
        match attribute {
            EdgeAttribute::Length => self.length,
            EdgeAttribute::ElevationGain => self.elevation_gain,
            EdgeAttribute::ElevationCost => self.elevation_cost,
        }
    }
}
