//! This module defines the interface used to query a street network, along
//! with an implementation backed by an in-memory petgraph graph.

pub mod petgraph;
pub mod provider;
