//! Path queries between two addresses. Each query resolves the addresses,
//! snaps them to the nearest graph nodes and then hands off to the graph
//! provider for the actual search.

use tracing::debug;

use crate::common::config::EdgeAttribute;
use crate::common::coords::Coordinate;
use crate::common::error::Result;
use crate::geocoding::GeoCoder;
use crate::graph::provider::GraphProvider;
use crate::navigation::addresses::get_navigation_coordinates;
use crate::navigation::metrics::path_length;
use crate::navigation::structs::{
    CandidateSet, ElevationCandidates, RoutedPath, WeightedPath,
};

/// Coordinates for both addresses, and the nodes closest to them
struct ResolvedEndpoints {
    location_orig: Coordinate,
    location_dest: Coordinate,
    from_node: i64,
    to_node: i64,
}

fn resolve_endpoints<C, P>(
    geocoder: &C,
    provider: &P,
    from_address: &str,
    to_address: &str,
) -> Result<ResolvedEndpoints>
where
    C: GeoCoder + ?Sized,
    P: GraphProvider + ?Sized,
{
    let (location_orig, location_dest) =
        get_navigation_coordinates(geocoder, from_address, to_address)?;

    let from_node = provider.nearest_node(&location_orig)?;
    let to_node = provider.nearest_node(&location_dest)?;
    debug!(from_node, to_node, "matched addresses to graph nodes");

    Ok(ResolvedEndpoints {
        location_orig,
        location_dest,
        from_node,
        to_node,
    })
}

/// Get a single shortest path between two addresses, minimising the
/// provided edge weight (typically `EdgeAttribute::Length`)
pub fn get_shortest_path<C, P>(
    geocoder: &C,
    provider: &P,
    from_address: &str,
    to_address: &str,
    weight: EdgeAttribute,
) -> Result<RoutedPath>
where
    C: GeoCoder + ?Sized,
    P: GraphProvider + ?Sized,
{
    let ends = resolve_endpoints(geocoder, provider, from_address, to_address)?;

    let path = provider.shortest_path(ends.from_node, ends.to_node, weight)?;

    Ok(RoutedPath {
        path,
        location_orig: ends.location_orig,
        location_dest: ends.location_dest,
    })
}

/// Get every path between two addresses which ties for the lowest elevation
/// weight, along with the shortest path by length. The elevation paths are
/// ranked by their physical length rather than by the weight used to find
/// them, so the first candidate is the shortest of the equally flat options.
pub fn get_all_shortest_paths<C, P>(
    geocoder: &C,
    provider: &P,
    from_address: &str,
    to_address: &str,
    weight: EdgeAttribute,
) -> Result<ElevationCandidates>
where
    C: GeoCoder + ?Sized,
    P: GraphProvider + ?Sized,
{
    let ends = resolve_endpoints(geocoder, provider, from_address, to_address)?;

    let elevation_paths =
        provider.all_shortest_paths(ends.from_node, ends.to_node, weight)?;
    let baseline = provider.shortest_path(
        ends.from_node,
        ends.to_node,
        EdgeAttribute::Length,
    )?;

    let mut weighted_paths = Vec::<WeightedPath>::new();
    for path in elevation_paths {
        let length = path_length(provider, &path)?;
        weighted_paths.push(WeightedPath { length, path });
    }

    let candidates = CandidateSet::new(weighted_paths);
    debug!(
        candidates = candidates.len(),
        %weight,
        "ranked elevation based candidates by length"
    );

    Ok(ElevationCandidates {
        candidates,
        baseline,
        location_orig: ends.location_orig,
        location_dest: ends.location_dest,
    })
}
