//! Distance metric and engine cost callbacks.
//!
//! Provides a dense Manhattan distance matrix and the [`TransitCost`]
//! callback trait engines use to query it.

mod matrix;
mod transit;

pub use matrix::DistanceMatrix;
pub use transit::TransitCost;
