//! Point-to-point navigation over a street network, trading a limited amount
//! of extra distance for a reduction in elevation gain.

pub mod common;
pub mod geocoding;
pub mod graph;
pub mod navigation;

#[cfg(test)]
pub(crate) mod fixtures;
