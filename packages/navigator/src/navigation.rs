//! This module picks the route to recommend between two addresses. Paths
//! which minimise an elevation based weight are compared against the
//! shortest path by length, and the best of them is reported along with the
//! trade-off it represents.

pub mod addresses;
pub mod metrics;
pub mod queries;
pub mod structs;
pub mod tolerance;

use rayon::prelude::*;
use tracing::debug;

use crate::common::config::{EdgeAttribute, NavigationConfig};
use crate::common::coords::Coordinate;
use crate::common::error::Result;
use crate::geocoding::GeoCoder;
use crate::graph::provider::GraphProvider;
use crate::navigation::structs::{
    ElevationCandidates, RoutedPath, RoutingResult,
};

/// Bundles a geocoder and a graph provider, so that the individual
/// navigation steps can be run without passing both around. Holds no state
/// between queries.
#[derive(Debug, Clone)]
pub struct Navigator<C, P> {
    geocoder: C,
    provider: P,
}

impl<C: GeoCoder, P: GraphProvider> Navigator<C, P> {
    pub fn new(geocoder: C, provider: P) -> Navigator<C, P> {
        Navigator { geocoder, provider }
    }

    pub fn geocoder(&self) -> &C {
        &self.geocoder
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// See `addresses::get_navigation_coordinates`
    pub fn get_navigation_coordinates(
        &self,
        from_address: &str,
        to_address: &str,
    ) -> Result<(Coordinate, Coordinate)> {
        addresses::get_navigation_coordinates(
            &self.geocoder,
            from_address,
            to_address,
        )
    }

    /// See `queries::get_shortest_path`
    pub fn get_shortest_path(
        &self,
        from_address: &str,
        to_address: &str,
        weight: EdgeAttribute,
    ) -> Result<RoutedPath> {
        queries::get_shortest_path(
            &self.geocoder,
            &self.provider,
            from_address,
            to_address,
            weight,
        )
    }

    /// See `queries::get_all_shortest_paths`
    pub fn get_all_shortest_paths(
        &self,
        from_address: &str,
        to_address: &str,
        weight: EdgeAttribute,
    ) -> Result<ElevationCandidates> {
        queries::get_all_shortest_paths(
            &self.geocoder,
            &self.provider,
            from_address,
            to_address,
            weight,
        )
    }

    /// See `tolerance::filter_paths_by_tolerance`
    pub fn filter_paths_by_tolerance(
        &self,
        elevation_candidates: &ElevationCandidates,
        tolerance: f64,
    ) -> Result<RoutingResult> {
        tolerance::filter_paths_by_tolerance(
            &self.provider,
            elevation_candidates,
            tolerance,
        )
    }

    /// Run the full pipeline for a single request: find the elevation based
    /// candidates, then pick one according to the requested tolerance
    pub fn navigate(&self, config: &NavigationConfig) -> Result<RoutingResult> {
        debug!(
            from = %config.from_address,
            to = %config.to_address,
            tolerance = config.tolerance,
            "starting navigation"
        );

        let candidates = self.get_all_shortest_paths(
            &config.from_address,
            &config.to_address,
            config.weight,
        )?;

        self.filter_paths_by_tolerance(&candidates, config.tolerance)
    }
}

impl<C, P> Navigator<C, P>
where
    C: GeoCoder + Sync,
    P: GraphProvider + Sync,
{
    /// Process a number of independent requests, using Rayon to distribute
    /// them across threads. Results are returned in the same order as the
    /// requests, and a failure in one request does not affect the others.
    pub fn navigate_batch(
        &self,
        configs: &[NavigationConfig],
    ) -> Vec<Result<RoutingResult>> {
        let mut results: Vec<Result<RoutingResult>> = Vec::new();

        configs
            .par_iter()
            .map(|config| self.navigate(config))
            .collect_into_vec(&mut results);

        results
    }
}
