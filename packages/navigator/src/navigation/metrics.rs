//! Aggregation of per-edge values into whole-path metrics (total distance,
//! total climb)

use crate::common::config::EdgeAttribute;
use crate::common::error::Result;
use crate::graph::provider::GraphProvider;

/// Sum the lengths of every edge traversed
pub fn total_length(lengths: &[f64]) -> f64 {
    lengths.iter().sum()
}

/// Sum only the climbs along a path. Descents are not credited back against
/// the total.
pub fn total_elevation_gain(gains: &[f64]) -> f64 {
    gains.iter().filter(|gain| **gain > 0.0).sum()
}

/// Determine the physical length of a path in metres
pub fn path_length<P: GraphProvider + ?Sized>(
    provider: &P,
    path: &[i64],
) -> Result<f64> {
    let lengths = provider.edge_attribute(path, EdgeAttribute::Length)?;
    Ok(total_length(&lengths))
}

/// Determine the total climb along a path in metres
pub fn path_elevation_gain<P: GraphProvider + ?Sized>(
    provider: &P,
    path: &[i64],
) -> Result<f64> {
    let gains = provider.edge_attribute(path, EdgeAttribute::ElevationGain)?;
    Ok(total_elevation_gain(&gains))
}
