//! End-to-end runs driven by a serializable scenario.
//!
//! A [`ScenarioConfig`] describes locations, fleet, budget and search
//! settings. [`run`] builds the geography and metric, configures a model on
//! the given engine, solves it and renders the report.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::constraints::configure;
use crate::distance::DistanceMatrix;
use crate::engine::{FirstSolutionStrategy, RoutingEngine, SearchParameters};
use crate::error::Result;
use crate::models::{Geography, ScaleFactor};
use crate::report::{render, Report};
use crate::search::{solve, SolveOutcome};

/// Whole-run configuration.
///
/// Missing JSON fields fall back to the reference city-block scenario.
///
/// # Examples
///
/// ```
/// use grid_routing::scenario::ScenarioConfig;
///
/// let config = ScenarioConfig::from_json(r#"{ "vehicles": 2 }"#).unwrap();
/// assert_eq!(config.vehicles, 2);
/// assert_eq!(config.locations.len(), 17);
/// assert_eq!(config.max_distance_per_vehicle, 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Raw grid coordinates; the first entry is the depot.
    pub locations: Vec<(i64, i64)>,
    /// Metres per unit step along x.
    pub block_width: i64,
    /// Metres per unit step along y.
    pub block_height: i64,
    /// Fleet size.
    pub vehicles: usize,
    /// Per-vehicle distance budget in metres.
    pub max_distance_per_vehicle: i64,
    /// Weight of the longest route in the objective.
    pub global_span_coefficient: i64,
    /// Construction heuristic for the first solution.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Whether the improvement phase runs after construction.
    pub local_search: bool,
    /// Improvement time limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl ScenarioConfig {
    /// Sixteen stops around a central depot on a 114 m × 80 m block grid,
    /// four vehicles with a 3000 m budget each.
    pub fn reference() -> Self {
        Self {
            locations: vec![
                (4, 4),
                (2, 0),
                (8, 0),
                (0, 1),
                (1, 1),
                (5, 2),
                (7, 2),
                (3, 3),
                (6, 3),
                (5, 5),
                (8, 5),
                (1, 6),
                (2, 6),
                (3, 7),
                (6, 7),
                (0, 8),
                (7, 8),
            ],
            block_width: 114,
            block_height: 80,
            vehicles: 4,
            max_distance_per_vehicle: 3000,
            global_span_coefficient: 100,
            first_solution_strategy: FirstSolutionStrategy::PathCheapestArc,
            local_search: true,
            time_limit_ms: None,
        }
    }

    /// Parses a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the scaled geography.
    pub fn geography(&self) -> Result<Geography> {
        let scale = ScaleFactor::new(self.block_width, self.block_height)?;
        Geography::new(&self.locations, scale, self.vehicles)
    }

    /// Search parameters for the solve call.
    pub fn search_parameters(&self) -> SearchParameters {
        let params = SearchParameters::default()
            .with_first_solution_strategy(self.first_solution_strategy)
            .with_local_search(self.local_search);
        match self.time_limit_ms {
            Some(ms) => params.with_time_limit(Duration::from_millis(ms)),
            None => params,
        }
    }
}

/// Runs a scenario on `engine`.
///
/// Returns `Ok(None)` when no assignment satisfies the budget.
///
/// # Examples
///
/// ```
/// use grid_routing::engine::local::LocalEngine;
/// use grid_routing::scenario::{run, ScenarioConfig};
///
/// let report = run(&LocalEngine, &ScenarioConfig::reference())
///     .unwrap()
///     .expect("feasible");
/// assert_eq!(report.routes().len(), 4);
/// assert!(report.max_route_distance() <= 3000);
/// ```
#[instrument(skip_all, fields(locations = config.locations.len(), vehicles = config.vehicles))]
pub fn run<E: RoutingEngine>(engine: &E, config: &ScenarioConfig) -> Result<Option<Report>> {
    let geography = config.geography()?;
    let metric = Arc::new(DistanceMatrix::manhattan(&geography));
    debug!(
        max_round_trip = metric.max_round_trip(geography.depot_index()),
        "distance matrix built"
    );

    let mut model = engine.new_model(
        geography.location_count(),
        geography.vehicle_count(),
        geography.depot_index(),
    )?;
    configure(
        &mut model,
        &metric,
        config.max_distance_per_vehicle,
        config.global_span_coefficient,
    )?;

    match solve(&model, &config.search_parameters())? {
        SolveOutcome::Solved(assignment) => render(&geography, &model, &assignment).map(Some),
        SolveOutcome::Infeasible => Ok(None),
    }
}
