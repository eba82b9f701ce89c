//! Error taxonomy for model construction, configuration and reporting.
//!
//! An over-constrained but valid model is not an error: see
//! [`SolveOutcome::Infeasible`](crate::search::SolveOutcome::Infeasible).

use thiserror::Error;

/// Errors raised while building, configuring or reading a routing model.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// Malformed input data, detected eagerly at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Illegal or duplicate constraint registration on an engine model.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// An assignment whose successor chain does not describe a route.
    #[error("malformed assignment: {0}")]
    MalformedAssignment(String),
    /// Scenario (de)serialization failure.
    #[error("failed to read scenario")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
