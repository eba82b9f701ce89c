//! In-process routing engine.
//!
//! A deterministic baseline implementation of the engine contract:
//!
//! - [`construction`]: first-solution heuristics selected by
//!   [`FirstSolutionStrategy`]
//! - [`improve`]: 2-opt and relocate on the full objective
//! - [`evaluation`]: route cost, dimension feasibility, objective
//!
//! No randomness is involved; ties are broken by lowest index, so the same
//! model and parameters always yield the same assignment.

mod construction;
mod evaluation;
mod improve;

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use super::{
    Assignment, Dimension, FirstSolutionStrategy, IndexManager, RoutingEngine, RoutingModel,
    SearchParameters,
};
use crate::distance::TransitCost;
use crate::error::{Result, RoutingError};

use evaluation::Evaluator;

/// Factory for [`LocalModel`]s.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grid_routing::distance::DistanceMatrix;
/// use grid_routing::engine::local::LocalEngine;
/// use grid_routing::engine::{RoutingEngine, RoutingModel, SearchParameters};
/// use grid_routing::models::{Geography, ScaleFactor};
///
/// let geo = Geography::new(&[(0, 0), (1, 0), (2, 0)], ScaleFactor::unit(), 1).unwrap();
/// let metric = Arc::new(DistanceMatrix::manhattan(&geo));
///
/// let mut model = LocalEngine.new_model(3, 1, 0).unwrap();
/// model.set_arc_cost_evaluator_of_all_vehicles(metric);
/// let assignment = model
///     .solve_with_parameters(&SearchParameters::default())
///     .unwrap()
///     .expect("feasible");
/// assert_eq!(assignment.objective_value(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEngine;

impl RoutingEngine for LocalEngine {
    type Model = LocalModel;

    fn new_model(
        &self,
        node_count: usize,
        vehicle_count: usize,
        depot: usize,
    ) -> Result<Self::Model> {
        let manager = IndexManager::new(node_count, vehicle_count, depot)?;
        Ok(LocalModel::new(manager))
    }
}

/// Routing model solved in-process.
pub struct LocalModel {
    manager: IndexManager,
    arc_cost: Option<Arc<dyn TransitCost>>,
    dimensions: Vec<Dimension>,
}

impl LocalModel {
    /// Creates an unconfigured model.
    pub fn new(manager: IndexManager) -> Self {
        Self {
            manager,
            arc_cost: None,
            dimensions: Vec::new(),
        }
    }

    /// Registered dimensions in registration order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    fn check_node_count(&self, callback: &dyn TransitCost, what: &str) -> Result<()> {
        if callback.node_count() != self.manager.node_count() {
            return Err(RoutingError::Configuration(format!(
                "{what} covers {} nodes but the model has {}",
                callback.node_count(),
                self.manager.node_count()
            )));
        }
        Ok(())
    }

    fn to_assignment(&self, routes: &[Vec<usize>], objective: i64) -> Assignment {
        let mut next: Vec<usize> = (0..self.manager.num_indices()).collect();
        for (vehicle, route) in routes.iter().enumerate() {
            let mut prev = self.manager.start(vehicle);
            for index in route.iter().filter_map(|&node| self.manager.node_to_index(node)) {
                next[prev] = index;
                prev = index;
            }
            next[prev] = self.manager.end(vehicle);
        }
        Assignment::new(next, objective)
    }
}

impl RoutingModel for LocalModel {
    fn index_manager(&self) -> &IndexManager {
        &self.manager
    }

    fn set_arc_cost_evaluator_of_all_vehicles(&mut self, cost: Arc<dyn TransitCost>) {
        self.arc_cost = Some(cost);
    }

    fn add_dimension(
        &mut self,
        transit: Arc<dyn TransitCost>,
        slack_max: i64,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
        name: &str,
    ) -> Result<()> {
        if self.has_dimension(name) {
            return Err(RoutingError::Configuration(format!(
                "dimension '{name}' already exists"
            )));
        }
        self.check_node_count(&*transit, "dimension transit")?;
        let dimension = Dimension::new(name, transit, slack_max, capacity, fix_start_cumul_to_zero)?;
        debug!(name, capacity, slack_max, "dimension added");
        self.dimensions.push(dimension);
        Ok(())
    }

    fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name() == name)
    }

    fn dimension_mut(&mut self, name: &str) -> Option<&mut Dimension> {
        self.dimensions.iter_mut().find(|d| d.name() == name)
    }

    fn solve_with_parameters(&self, params: &SearchParameters) -> Result<Option<Assignment>> {
        let arc_cost = self.arc_cost.as_deref().ok_or_else(|| {
            RoutingError::Configuration("no arc cost evaluator registered".into())
        })?;
        self.check_node_count(arc_cost, "arc cost evaluator")?;

        let depot = self.manager.depot();
        let vehicles = self.manager.vehicle_count();
        let eval = Evaluator::new(arc_cost, &self.dimensions, depot);
        let visits: Vec<usize> = (0..self.manager.node_count())
            .filter(|&node| node != depot)
            .collect();

        let deadline = params.time_limit().map(|limit| Instant::now() + limit);
        let strategy = params.first_solution_strategy();
        let constructed = match strategy {
            FirstSolutionStrategy::PathCheapestArc => {
                construction::path_cheapest_arc(&eval, &visits, vehicles)
            }
            FirstSolutionStrategy::ParallelCheapestInsertion => {
                construction::parallel_cheapest_insertion(&eval, &visits, vehicles)
            }
            FirstSolutionStrategy::Savings => construction::savings(&eval, &visits, vehicles),
        };

        let Some(mut routes) = constructed else {
            debug!(?strategy, "construction could not route every node");
            return Ok(None);
        };
        debug!(?strategy, objective = eval.objective(&routes), "first solution built");

        if params.local_search() {
            improve::improve(&eval, &mut routes, deadline);
        }

        let objective = eval.objective(&routes);
        Ok(Some(self.to_assignment(&routes, objective)))
    }

    fn arc_cost_for_vehicle(&self, from_index: usize, to_index: usize, _vehicle: usize) -> i64 {
        match &self.arc_cost {
            Some(cost) => cost.transit(
                self.manager.index_to_node(from_index),
                self.manager.index_to_node(to_index),
            ),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Geography, ScaleFactor};

    fn line_metric() -> Arc<DistanceMatrix> {
        let geo = Geography::new(&[(0, 0), (1, 0), (2, 0), (3, 0)], ScaleFactor::unit(), 2)
            .expect("valid");
        Arc::new(DistanceMatrix::manhattan(&geo))
    }

    fn model_with(metric: &Arc<DistanceMatrix>, vehicles: usize, capacity: i64) -> LocalModel {
        let mut model = LocalEngine
            .new_model(metric.location_count(), vehicles, 0)
            .expect("valid");
        model.set_arc_cost_evaluator_of_all_vehicles(metric.clone());
        model
            .add_dimension(metric.clone(), 0, capacity, true, "Distance")
            .expect("fresh dimension");
        model
    }

    #[test]
    fn test_solve_line() {
        let metric = line_metric();
        let model = model_with(&metric, 1, 100);
        let a = model
            .solve_with_parameters(&SearchParameters::default())
            .expect("configured")
            .expect("feasible");
        assert_eq!(a.objective_value(), 6);
        assert_eq!(a.len(), model.index_manager().num_indices());
    }

    #[test]
    fn test_solve_without_arc_cost() {
        let model = LocalEngine.new_model(3, 1, 0).expect("valid");
        let err = model
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert!(matches!(err, RoutingError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_dimension() {
        let metric = line_metric();
        let mut model = model_with(&metric, 1, 100);
        let err = model
            .add_dimension(metric.clone(), 0, 100, true, "Distance")
            .unwrap_err();
        assert!(matches!(err, RoutingError::Configuration(_)));
        assert_eq!(model.dimensions().len(), 1);
    }

    #[test]
    fn test_mismatched_transit_size() {
        let metric = line_metric();
        let mut model = LocalEngine.new_model(2, 1, 0).expect("valid");
        let err = model
            .add_dimension(metric, 0, 100, true, "Distance")
            .unwrap_err();
        assert!(matches!(err, RoutingError::Configuration(_)));
    }

    #[test]
    fn test_infeasible_budget() {
        let metric = line_metric();
        // round trip to the farthest stop is 6
        let model = model_with(&metric, 2, 5);
        for strategy in [
            FirstSolutionStrategy::PathCheapestArc,
            FirstSolutionStrategy::ParallelCheapestInsertion,
            FirstSolutionStrategy::Savings,
        ] {
            let params = SearchParameters::default().with_first_solution_strategy(strategy);
            let result = model.solve_with_parameters(&params).expect("configured");
            assert!(result.is_none(), "{strategy:?} should be infeasible");
        }
    }

    #[test]
    fn test_assignment_chains_to_end() {
        let metric = line_metric();
        let model = model_with(&metric, 2, 100);
        let a = model
            .solve_with_parameters(&SearchParameters::default())
            .expect("configured")
            .expect("feasible");
        let mut seen = 0;
        for v in 0..model.vehicle_count() {
            let mut index = model.start(v);
            while !model.is_end(index) {
                index = a.next(index);
                seen += 1;
            }
            assert_eq!(index, model.index_manager().end(v));
        }
        // three visits plus one arrival at each end
        assert_eq!(seen, 3 + 2);
    }

    #[test]
    fn test_arc_cost_for_vehicle_maps_indices() {
        let metric = line_metric();
        let model = model_with(&metric, 1, 100);
        let manager = model.index_manager();
        let to_three = manager.node_to_index(3).expect("visit");
        assert_eq!(model.arc_cost_for_vehicle(manager.start(0), to_three, 0), 3);
        assert_eq!(
            model.arc_cost_for_vehicle(manager.start(0), manager.end(0), 0),
            0
        );
    }
}
