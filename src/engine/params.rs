//! Search parameters passed to a routing engine's solve entry point.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Construction heuristic used to build the first feasible route set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Extend the current route along its cheapest feasible outgoing arc.
    #[default]
    PathCheapestArc,
    /// Insert the globally cheapest (node, position) pair across all routes.
    ParallelCheapestInsertion,
    /// Clarke-Wright savings merges.
    Savings,
}

/// Parameters for one solve call.
///
/// Defaults: [`FirstSolutionStrategy::PathCheapestArc`], improvement enabled,
/// no time limit.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use grid_routing::engine::{FirstSolutionStrategy, SearchParameters};
///
/// let params = SearchParameters::default()
///     .with_first_solution_strategy(FirstSolutionStrategy::Savings)
///     .with_time_limit(Duration::from_secs(1));
/// assert_eq!(params.first_solution_strategy(), FirstSolutionStrategy::Savings);
/// assert!(params.local_search());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    first_solution_strategy: FirstSolutionStrategy,
    local_search: bool,
    time_limit: Option<Duration>,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::default(),
            local_search: true,
            time_limit: None,
        }
    }
}

impl SearchParameters {
    /// Sets the construction heuristic.
    pub fn with_first_solution_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    /// Enables or disables the improvement phase.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }

    /// Bounds the improvement phase.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Construction heuristic.
    pub fn first_solution_strategy(&self) -> FirstSolutionStrategy {
        self.first_solution_strategy
    }

    /// Whether the improvement phase runs.
    pub fn local_search(&self) -> bool {
        self.local_search
    }

    /// Improvement time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}
