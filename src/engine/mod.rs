//! Routing engine contract.
//!
//! The combinatorial search lives behind two traits: a [`RoutingEngine`]
//! builds empty models, and a [`RoutingModel`] accepts cost callbacks and
//! dimensions, solves, and answers questions about its routing indices.
//!
//! - [`IndexManager`]: node ↔ routing index mapping
//! - [`Dimension`]: cumulative route quantity with capacity and span cost
//! - [`SearchParameters`]: first-solution strategy and search limits
//! - [`Assignment`]: successor mapping returned by a solve
//! - [`local`]: in-process engine implementing the contract

mod assignment;
mod dimension;
mod index;
pub mod local;
mod params;

use std::sync::Arc;

pub use assignment::Assignment;
pub use dimension::Dimension;
pub use index::IndexManager;
pub use params::{FirstSolutionStrategy, SearchParameters};

use crate::distance::TransitCost;
use crate::error::Result;

/// Builds empty routing models.
pub trait RoutingEngine {
    /// Model type produced by this engine.
    type Model: RoutingModel;

    /// Creates a model over `node_count` locations served by `vehicle_count`
    /// vehicles that all start and end at `depot`.
    fn new_model(&self, node_count: usize, vehicle_count: usize, depot: usize)
        -> Result<Self::Model>;
}

/// A routing model owned by an engine.
///
/// Callbacks registered here are co-owned by the model and stay alive until
/// it is dropped.
pub trait RoutingModel {
    /// Node ↔ routing index mapping of this model.
    fn index_manager(&self) -> &IndexManager;

    /// Uses `cost` as the arc cost of every vehicle.
    fn set_arc_cost_evaluator_of_all_vehicles(&mut self, cost: Arc<dyn TransitCost>);

    /// Registers a new dimension.
    ///
    /// Fails with [`RoutingError::Configuration`](crate::error::RoutingError::Configuration)
    /// if `name` is already registered or the bounds are invalid.
    fn add_dimension(
        &mut self,
        transit: Arc<dyn TransitCost>,
        slack_max: i64,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
        name: &str,
    ) -> Result<()>;

    /// Looks up a dimension by name.
    fn dimension(&self, name: &str) -> Option<&Dimension>;

    /// Looks up a dimension by name for mutation.
    fn dimension_mut(&mut self, name: &str) -> Option<&mut Dimension>;

    /// Runs the search. `Ok(None)` means no feasible assignment was found.
    fn solve_with_parameters(&self, params: &SearchParameters) -> Result<Option<Assignment>>;

    /// Arc cost between two routing indices for `vehicle`.
    fn arc_cost_for_vehicle(&self, from_index: usize, to_index: usize, vehicle: usize) -> i64;

    /// Number of vehicles.
    fn vehicle_count(&self) -> usize {
        self.index_manager().vehicle_count()
    }

    /// Route start index of `vehicle`.
    fn start(&self, vehicle: usize) -> usize {
        self.index_manager().start(vehicle)
    }

    /// Returns `true` if `index` terminates a route.
    fn is_end(&self, index: usize) -> bool {
        self.index_manager().is_end(index)
    }

    /// Location node behind a routing index.
    fn index_to_node(&self, index: usize) -> usize {
        self.index_manager().index_to_node(index)
    }

    /// Returns `true` if a dimension called `name` exists.
    fn has_dimension(&self, name: &str) -> bool {
        self.dimension(name).is_some()
    }
}
