use thiserror::Error;

use crate::common::config::EdgeAttribute;

/// Convenient result alias used throughout the navigator
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Every failure which can be raised while resolving addresses, searching
/// the graph or comparing candidate paths. None of these are retried
/// internally.
#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    /// Either the origin or the destination address was empty. Detected
    /// before any geocoding or graph lookups take place.
    #[error("origin and destination addresses must both be provided")]
    InvalidAddressInput,

    /// The geocoder could not resolve the address to a coordinate
    #[error("unable to resolve address: {address}")]
    AddressNotFound { address: String },

    /// No graph node could be matched to the provided coordinate
    #[error("no graph node found near ({lat}, {lon})")]
    NodeNotFound { lat: f64, lon: f64 },

    /// A path referenced a node ID which is not present in the graph
    #[error("node {id} is not present in the graph")]
    UnknownNode { id: i64 },

    /// Two consecutive nodes in a path are not joined by any edge
    #[error("no edge connects node {src} to node {dst}")]
    EdgeNotFound { src: i64, dst: i64 },

    /// The origin and destination sit in disconnected parts of the graph
    #[error("no path exists between node {from} and node {to}")]
    PathNotFound { from: i64, to: i64 },

    /// The elevation search did not produce a single candidate path
    #[error("no elevation based candidate paths were provided")]
    EmptyCandidateSet,

    #[error("tolerance must be a finite multiplier of at least 1.0, got {0}")]
    InvalidTolerance(f64),

    #[error("unknown edge attribute: {0}")]
    UnknownAttribute(String),

    /// The attribute may hold negative values, so cannot drive a shortest
    /// path search
    #[error("edge attribute {0} cannot be used as a search weight")]
    UnsupportedWeight(EdgeAttribute),
}
