//! Types shared across the crate: coordinates, graph weights, user
//! configuration and the error type.

pub mod config;
pub mod coords;
pub mod error;
pub mod graph_data;
