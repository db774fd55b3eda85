//! This module contains structs which represent the navigation options
//! selected by the end user. The NavigationConfig struct is what the rest of
//! this package expects to receive.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::common::error::NavigationError;

/// Names the numeric attributes stored against each edge, any of which can
/// be summed along a path. All but elevation gain can also be used to
/// weight a shortest path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAttribute {
    Length,
    ElevationGain,
    ElevationCost,
}

impl EdgeAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeAttribute::Length => "length",
            EdgeAttribute::ElevationGain => "elevation_gain",
            EdgeAttribute::ElevationCost => "elevation_cost",
        }
    }

    /// Elevation gain is negative on downhill edges, which rules it out for
    /// Dijkstra style searches
    pub fn is_search_weight(&self) -> bool {
        !matches!(self, EdgeAttribute::ElevationGain)
    }
}

impl FromStr for EdgeAttribute {
    type Err = NavigationError;

    fn from_str(input: &str) -> Result<EdgeAttribute, Self::Err> {
        match input {
            "length" => Ok(EdgeAttribute::Length),
            "elevation_gain" => Ok(EdgeAttribute::ElevationGain),
            "elevation_cost" => Ok(EdgeAttribute::ElevationCost),
            other => Err(NavigationError::UnknownAttribute(other.to_string())),
        }
    }
}

impl fmt::Display for EdgeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that a distance tolerance can be used as a multiplier on the
/// length of the shortest path
pub fn validate_tolerance(tolerance: f64) -> Result<f64, NavigationError> {
    if tolerance.is_finite() && tolerance >= 1.0 {
        Ok(tolerance)
    } else {
        Err(NavigationError::InvalidTolerance(tolerance))
    }
}

fn is_blank(address: &str) -> bool {
    address.trim().is_empty()
}

/// Check that both addresses have been provided, returning them as owned
/// strings if so
pub fn validate_addresses(
    from_address: Option<String>,
    to_address: Option<String>,
) -> Result<(String, String), NavigationError> {
    match (from_address, to_address) {
        (Some(from), Some(to)) if !is_blank(&from) && !is_blank(&to) => {
            Ok((from, to))
        }
        _ => Err(NavigationError::InvalidAddressInput),
    }
}

/// Stores the user's requested navigation exactly as it is received from
/// the API
#[derive(Deserialize, Debug, PartialEq)]
pub struct UserNavigationConfig {
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub tolerance: f64,
    #[serde(default)]
    pub weight: Option<String>,
}

impl TryFrom<UserNavigationConfig> for NavigationConfig {
    type Error = NavigationError;

    fn try_from(user: UserNavigationConfig) -> Result<Self, Self::Error> {
        let (from_address, to_address) =
            validate_addresses(user.from_address, user.to_address)?;

        let tolerance = validate_tolerance(user.tolerance)?;

        let weight = match user.weight {
            Some(name) => EdgeAttribute::from_str(&name)?,
            None => EdgeAttribute::ElevationCost,
        };
        if !weight.is_search_weight() {
            return Err(NavigationError::UnsupportedWeight(weight));
        }

        Ok(NavigationConfig {
            from_address,
            to_address,
            tolerance,
            weight,
        })
    }
}

/// Stores a validated navigation request. The weight is the edge attribute
/// used to find the elevation based candidate paths; the baseline path is
/// always found using length.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub from_address: String,
    pub to_address: String,
    pub tolerance: f64,
    pub weight: EdgeAttribute,
}

impl NavigationConfig {
    /// Create a config which searches for candidates by elevation cost
    pub fn new(
        from_address: impl Into<String>,
        to_address: impl Into<String>,
        tolerance: f64,
    ) -> NavigationConfig {
        NavigationConfig {
            from_address: from_address.into(),
            to_address: to_address.into(),
            tolerance,
            weight: EdgeAttribute::ElevationCost,
        }
    }
}
