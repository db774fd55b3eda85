//! Defines the containers passed between the navigation steps, and the
//! final result handed back to the caller

use approx::abs_diff_eq;
use serde::Serialize;

use crate::common::coords::Coordinate;
use crate::graph::provider::NodePath;

/// A path along with its total length in metres
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    pub length: f64,
    pub path: NodePath,
}

/// Candidate paths, always held in ascending order of length. The first
/// entry is the best elevation based candidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    paths: Vec<WeightedPath>,
}

impl CandidateSet {
    /// Sort the provided paths by length. The sort is stable, so paths of
    /// equal length keep the order they were provided in.
    pub fn new(mut paths: Vec<WeightedPath>) -> CandidateSet {
        paths.sort_by(|a, b| a.length.total_cmp(&b.length));
        CandidateSet { paths }
    }

    pub fn best(&self) -> Option<&WeightedPath> {
        self.paths.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedPath> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Output of a single path query
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    pub path: NodePath,
    pub location_orig: Coordinate,
    pub location_dest: Coordinate,
}

/// Output of the multi-path elevation query. Holds every path which ties on
/// elevation weight, plus the shortest path by length to compare against.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationCandidates {
    pub candidates: CandidateSet,
    pub baseline: NodePath,
    pub location_orig: Coordinate,
    pub location_dest: Coordinate,
}

/// A percentage change relative to some baseline quantity. When the baseline
/// is zero the change cannot be expressed as a percentage, and is marked as
/// undefined instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Percentage {
    Defined(f64),
    Undefined,
}

impl Percentage {
    /// Express `delta` as a percentage of `baseline`
    pub fn of_baseline(delta: f64, baseline: f64) -> Percentage {
        if abs_diff_eq!(baseline, 0.0) {
            Percentage::Undefined
        } else {
            Percentage::Defined(100.0 * (delta / baseline))
        }
    }

    /// The percentage, with undefined values reported as 0
    pub fn value(&self) -> f64 {
        match self {
            Percentage::Defined(perc) => *perc,
            Percentage::Undefined => 0.0,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Percentage::Defined(_))
    }
}

/// The selected path and the trade-off it represents, compared with the
/// shortest path by length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingResult {
    /// Whether the selected path fits within the requested tolerance
    pub found: bool,
    pub path: NodePath,
    pub original_elevation_gain: f64,
    pub elevation_reduction: Percentage,
    pub original_path_length: f64,
    pub path_length_increase: Percentage,
    pub location_orig: Coordinate,
    pub location_dest: Coordinate,
}

impl RoutingResult {
    /// True if either percentage could not be calculated due to a zero
    /// baseline
    pub fn has_degenerate_baseline(&self) -> bool {
        !(self.elevation_reduction.is_defined()
            && self.path_length_increase.is_defined())
    }
}

#[cfg(test)]
mod tests {

    use approx::assert_relative_eq;
    use serde_json::json;

    use super::*;

    fn weighted(length: f64, path: Vec<i64>) -> WeightedPath {
        WeightedPath { length, path }
    }

    mod test_candidate_set {
        use super::*;

        /// Lengths must be non-decreasing from one candidate to the next
        #[test]
        fn test_sorted() {
            let result = CandidateSet::new(vec![
                weighted(1100.0, vec![1, 4, 3]),
                weighted(900.0, vec![1, 6, 3]),
                weighted(1050.0, vec![1, 5, 3]),
            ]);

            let lengths: Vec<f64> = result.iter().map(|wp| wp.length).collect();

            assert_eq!(lengths, vec![900.0, 1050.0, 1100.0]);
            assert_eq!(result.best(), Some(&weighted(900.0, vec![1, 6, 3])));
        }

        /// Equal lengths should not be reordered
        #[test]
        fn test_stable() {
            let result = CandidateSet::new(vec![
                weighted(10.0, vec![1, 2]),
                weighted(5.0, vec![1, 3]),
                weighted(10.0, vec![1, 4]),
            ]);

            let paths: Vec<NodePath> =
                result.iter().map(|wp| wp.path.clone()).collect();

            assert_eq!(paths, vec![vec![1, 3], vec![1, 2], vec![1, 4]]);
        }

        #[test]
        fn test_empty() {
            let result = CandidateSet::new(Vec::new());

            assert!(result.is_empty());
            assert_eq!(result.len(), 0);
            assert_eq!(result.best(), None);
        }
    }

    mod test_percentage {
        use super::*;

        #[test]
        fn test_defined() {
            let result = Percentage::of_baseline(30.0, 50.0);

            assert!(result.is_defined());
            assert_relative_eq!(result.value(), 60.0);
        }

        #[test]
        fn test_negative() {
            let result = Percentage::of_baseline(-10.0, 50.0);

            assert_relative_eq!(result.value(), -20.0);
        }

        /// A zero baseline must not produce inf or NaN
        #[test]
        fn test_zero_baseline() {
            let result = Percentage::of_baseline(10.0, 0.0);

            assert_eq!(result, Percentage::Undefined);
            assert_eq!(result.value(), 0.0);
        }
    }

    fn get_test_result() -> RoutingResult {
        RoutingResult {
            found: true,
            path: vec![1, 4, 3],
            original_elevation_gain: 50.0,
            elevation_reduction: Percentage::Defined(60.0),
            original_path_length: 1000.0,
            path_length_increase: Percentage::Undefined,
            location_orig: Coordinate::new(1.0, 2.0),
            location_dest: Coordinate::new(3.0, 4.0),
        }
    }

    #[test]
    fn test_has_degenerate_baseline() {
        let mut result = get_test_result();
        assert!(result.has_degenerate_baseline());

        result.path_length_increase = Percentage::Defined(10.0);
        assert!(!result.has_degenerate_baseline());
    }

    /// Check the shape of the result when rendered to JSON for the frontend
    #[test]
    fn test_serialize_result() {
        let result = serde_json::to_value(get_test_result()).unwrap();

        let target = json!({
            "found": true,
            "path": [1, 4, 3],
            "original_elevation_gain": 50.0,
            "elevation_reduction": 60.0,
            "original_path_length": 1000.0,
            "path_length_increase": null,
            "location_orig": [1.0, 2.0],
            "location_dest": [3.0, 4.0],
        });

        assert_eq!(result, target);
    }
}
