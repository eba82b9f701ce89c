//! Search orchestration: the seam between a configured model and the engine.

use tracing::{info, instrument, warn};

use crate::engine::{Assignment, FirstSolutionStrategy, RoutingModel, SearchParameters};
use crate::error::Result;

/// Result of a solve call on a correctly configured model.
///
/// `Infeasible` is an expected outcome for an over-constrained model, not an
/// error; the caller decides whether to relax the budget or add vehicles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The engine found an assignment satisfying every constraint.
    Solved(Assignment),
    /// No assignment satisfies the constraints.
    Infeasible,
}

impl SolveOutcome {
    /// The assignment, if one was found.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveOutcome::Solved(a) => Some(a),
            SolveOutcome::Infeasible => None,
        }
    }

    /// Consumes the outcome, returning the assignment if one was found.
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveOutcome::Solved(a) => Some(a),
            SolveOutcome::Infeasible => None,
        }
    }

    /// Returns `true` if no assignment was found.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveOutcome::Infeasible)
    }
}

/// Runs the engine on a configured model.
///
/// Errors are reserved for malformed models; an over-constrained model
/// yields `Ok(SolveOutcome::Infeasible)`.
#[instrument(skip_all, fields(strategy = ?params.first_solution_strategy()))]
pub fn solve<M>(model: &M, params: &SearchParameters) -> Result<SolveOutcome>
where
    M: RoutingModel + ?Sized,
{
    match model.solve_with_parameters(params)? {
        Some(assignment) => {
            info!(objective = assignment.objective_value(), "solution found");
            Ok(SolveOutcome::Solved(assignment))
        }
        None => {
            warn!("no feasible assignment");
            Ok(SolveOutcome::Infeasible)
        }
    }
}

/// Runs the engine with default parameters and the given first-solution
/// strategy.
pub fn solve_with_strategy<M>(model: &M, strategy: FirstSolutionStrategy) -> Result<SolveOutcome>
where
    M: RoutingModel + ?Sized,
{
    let params = SearchParameters::default().with_first_solution_strategy(strategy);
    solve(model, &params)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::constraints::configure;
    use crate::distance::DistanceMatrix;
    use crate::engine::local::{LocalEngine, LocalModel};
    use crate::engine::RoutingEngine;
    use crate::error::RoutingError;
    use crate::models::{Geography, ScaleFactor};

    fn configured(budget: i64) -> (Arc<DistanceMatrix>, LocalModel) {
        let scale = ScaleFactor::new(114, 80).expect("valid");
        let geo = Geography::new(&[(5, 0), (2, 0), (8, 0)], scale, 1).expect("valid");
        let metric = Arc::new(DistanceMatrix::manhattan(&geo));
        let mut model = LocalEngine.new_model(3, 1, 0).expect("valid");
        configure(&mut model, &metric, budget, 0).expect("configured");
        (metric, model)
    }

    #[test]
    fn test_solved() {
        let (_metric, model) = configured(10_000);
        let outcome = solve(&model, &SearchParameters::default()).expect("well formed");
        assert!(!outcome.is_infeasible());
        assert_eq!(outcome.assignment().map(|a| a.objective_value()), Some(1368));
    }

    #[test]
    fn test_infeasible_is_a_value() {
        let (_metric, model) = configured(1000);
        let outcome = solve(&model, &SearchParameters::default()).expect("well formed");
        assert!(outcome.is_infeasible());
        assert!(outcome.into_assignment().is_none());
    }

    #[test]
    fn test_every_strategy_solves() {
        let (_metric, model) = configured(10_000);
        for strategy in [
            FirstSolutionStrategy::PathCheapestArc,
            FirstSolutionStrategy::ParallelCheapestInsertion,
            FirstSolutionStrategy::Savings,
        ] {
            let outcome = solve_with_strategy(&model, strategy).expect("well formed");
            let objective = outcome.assignment().map(|a| a.objective_value());
            assert_eq!(objective, Some(1368), "{strategy:?}");
        }
    }

    #[test]
    fn test_unconfigured_model_is_an_error() {
        let model = LocalEngine.new_model(3, 1, 0).expect("valid");
        let err = solve(&model, &SearchParameters::default()).unwrap_err();
        assert!(matches!(err, RoutingError::Configuration(_)));
    }
}
