use tracing::{info, warn};

use crate::common::config::validate_tolerance;
use crate::common::error::{NavigationError, Result};
use crate::graph::provider::GraphProvider;
use crate::navigation::metrics::{path_elevation_gain, path_length};
use crate::navigation::structs::{
    ElevationCandidates, Percentage, RoutingResult,
};

/// Compare the best elevation based candidate against the shortest path by
/// length. The candidate is flagged as found if it is no longer than
/// `tolerance` times the shortest path; either way it is returned along
/// with the elevation saved and the distance added, so that a best effort
/// route can still be shown.
pub fn filter_paths_by_tolerance<P: GraphProvider + ?Sized>(
    provider: &P,
    elevation_candidates: &ElevationCandidates,
    tolerance: f64,
) -> Result<RoutingResult> {
    let tolerance = validate_tolerance(tolerance)?;

    // Baseline figures ---------------------------------------------------
    let baseline = &elevation_candidates.baseline;
    let shortest_path_length = path_length(provider, baseline)?;
    let shortest_path_elevation_gain = path_elevation_gain(provider, baseline)?;

    let max_path_length = tolerance * shortest_path_length;

    // Candidate figures --------------------------------------------------
    let best = elevation_candidates
        .candidates
        .best()
        .ok_or(NavigationError::EmptyCandidateSet)?;

    let found = best.length <= max_path_length;
    let candidate_elevation_gain = path_elevation_gain(provider, &best.path)?;

    let elevation_reduction = Percentage::of_baseline(
        shortest_path_elevation_gain - candidate_elevation_gain,
        shortest_path_elevation_gain,
    );
    let path_length_increase = Percentage::of_baseline(
        best.length - shortest_path_length,
        shortest_path_length,
    );

    if !found {
        warn!(
            candidate_length = best.length,
            max_path_length, "no elevation based path within tolerance"
        );
    }

    let result = RoutingResult {
        found,
        path: best.path.clone(),
        original_elevation_gain: shortest_path_elevation_gain,
        elevation_reduction,
        original_path_length: shortest_path_length,
        path_length_increase,
        location_orig: elevation_candidates.location_orig,
        location_dest: elevation_candidates.location_dest,
    };

    if result.has_degenerate_baseline() {
        warn!(
            shortest_path_length,
            shortest_path_elevation_gain,
            "baseline is degenerate, percentages are undefined"
        );
    }

    info!(
        found,
        elevation_reduction = elevation_reduction.value(),
        path_length_increase = path_length_increase.value(),
        "selected elevation based path"
    );

    Ok(result)
}
