//! Cumulative route quantities ("dimensions").

use std::fmt;
use std::sync::Arc;

use crate::distance::TransitCost;
use crate::error::{Result, RoutingError};

/// A named quantity accumulated along every vehicle route.
///
/// The cumul at a node is the cumul at its predecessor plus the transit
/// between them plus any slack taken there. It may never exceed
/// `capacity`. The global span cost charges
/// `coefficient * (max end cumul - min start cumul)` across vehicles.
pub struct Dimension {
    name: String,
    transit: Arc<dyn TransitCost>,
    slack_max: i64,
    capacity: i64,
    fix_start_cumul_to_zero: bool,
    global_span_cost_coefficient: i64,
}

impl Dimension {
    /// Creates a dimension with a zero span coefficient.
    pub fn new(
        name: impl Into<String>,
        transit: Arc<dyn TransitCost>,
        slack_max: i64,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
    ) -> Result<Self> {
        let name = name.into();
        if capacity < 0 {
            return Err(RoutingError::Configuration(format!(
                "dimension '{name}' capacity must be non-negative, got {capacity}"
            )));
        }
        if slack_max < 0 {
            return Err(RoutingError::Configuration(format!(
                "dimension '{name}' slack must be non-negative, got {slack_max}"
            )));
        }
        Ok(Self {
            name,
            transit,
            slack_max,
            capacity,
            fix_start_cumul_to_zero,
            global_span_cost_coefficient: 0,
        })
    }

    /// Dimension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum slack allowed at each node.
    pub fn slack_max(&self) -> i64 {
        self.slack_max
    }

    /// Upper bound on the cumul anywhere along a route.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Whether every route starts with a cumul of zero.
    pub fn fix_start_cumul_to_zero(&self) -> bool {
        self.fix_start_cumul_to_zero
    }

    /// Weight of the global span term in the objective.
    pub fn global_span_cost_coefficient(&self) -> i64 {
        self.global_span_cost_coefficient
    }

    /// Sets the weight of the global span term.
    pub fn set_global_span_cost_coefficient(&mut self, coefficient: i64) {
        self.global_span_cost_coefficient = coefficient;
    }

    /// Transit between two location nodes.
    pub fn transit(&self, from: usize, to: usize) -> i64 {
        self.transit.transit(from, to)
    }

    /// Span cost for the given per-vehicle end cumuls (starts are zero).
    pub fn span_cost(&self, end_cumuls: &[i64]) -> i64 {
        let max_end = end_cumuls.iter().copied().max().unwrap_or(0);
        self.global_span_cost_coefficient * max_end
    }
}

impl fmt::Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dimension")
            .field("name", &self.name)
            .field("slack_max", &self.slack_max)
            .field("capacity", &self.capacity)
            .field("fix_start_cumul_to_zero", &self.fix_start_cumul_to_zero)
            .field(
                "global_span_cost_coefficient",
                &self.global_span_cost_coefficient,
            )
            .finish_non_exhaustive()
    }
}
