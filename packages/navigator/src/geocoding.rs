//! Address resolution. The navigator only needs to turn free text into a
//! coordinate; how that happens is left to the GeoCoder implementation.

use rustc_hash::FxHashMap;

use crate::common::coords::Coordinate;
use crate::common::error::{NavigationError, Result};

/// Resolves a free-text address into a latitude & longitude pair.
/// Implementations should return `NavigationError::AddressNotFound` when the
/// address has no match.
pub trait GeoCoder {
    fn resolve(&self, address: &str) -> Result<Coordinate>;
}

/// Lower case the address and collapse any runs of whitespace, so that
/// trivially different spellings resolve to the same entry
fn normalize(address: &str) -> String {
    address
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<String>>()
        .join(" ")
}

/// In-memory gazetteer, mapping known addresses to their coordinates
#[derive(Debug, Clone, Default)]
pub struct StaticGeoCoder {
    entries: FxHashMap<String, Coordinate>,
}

impl StaticGeoCoder {
    pub fn new() -> Self {
        StaticGeoCoder::default()
    }

    /// Register an address, replacing any existing entry with the same
    /// normalized form
    pub fn insert(&mut self, address: &str, coords: Coordinate) {
        self.entries.insert(normalize(address), coords);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Coordinate)> for StaticGeoCoder {
    fn from_iter<I: IntoIterator<Item = (S, Coordinate)>>(iter: I) -> Self {
        let mut geocoder = StaticGeoCoder::new();
        for (address, coords) in iter {
            geocoder.insert(address.as_ref(), coords);
        }
        geocoder
    }
}

impl GeoCoder for StaticGeoCoder {
    fn resolve(&self, address: &str) -> Result<Coordinate> {
        self.entries.get(&normalize(address)).copied().ok_or_else(|| {
            NavigationError::AddressNotFound {
                address: address.to_string(),
            }
        })
    }
}
