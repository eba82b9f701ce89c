//! Wiring the distance metric into an engine model.
//!
//! Registers the metric as the arc cost of every vehicle and as a
//! cumulative `"Distance"` dimension bounded per vehicle, with a global span
//! cost that pushes the search toward routes of similar length.

use std::sync::Arc;

use tracing::debug;

use crate::distance::TransitCost;
use crate::engine::RoutingModel;
use crate::error::{Result, RoutingError};

/// Name of the cumulative distance dimension.
pub const DISTANCE_DIMENSION: &str = "Distance";

/// Configures `model` with `metric` as arc cost and as a bounded distance
/// dimension.
///
/// All checks run before the model is touched, so an error leaves it as it
/// was. Fails with [`RoutingError::Configuration`] when the dimension
/// already exists, a bound is negative, or the metric and model disagree on
/// the number of nodes.
///
/// The model keeps its own handle on `metric` for as long as it lives.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grid_routing::constraints::{configure, DISTANCE_DIMENSION};
/// use grid_routing::distance::DistanceMatrix;
/// use grid_routing::engine::local::LocalEngine;
/// use grid_routing::engine::{RoutingEngine, RoutingModel};
/// use grid_routing::models::{Geography, ScaleFactor};
///
/// let geo = Geography::new(&[(4, 4), (2, 0)], ScaleFactor::new(114, 80).unwrap(), 1).unwrap();
/// let metric = Arc::new(DistanceMatrix::manhattan(&geo));
/// let mut model = LocalEngine.new_model(2, 1, 0).unwrap();
///
/// configure(&mut model, &metric, 3000, 100).unwrap();
/// let dim = model.dimension(DISTANCE_DIMENSION).unwrap();
/// assert_eq!(dim.capacity(), 3000);
/// assert_eq!(dim.global_span_cost_coefficient(), 100);
/// ```
pub fn configure<M, C>(
    model: &mut M,
    metric: &Arc<C>,
    max_distance_per_vehicle: i64,
    global_span_coefficient: i64,
) -> Result<()>
where
    M: RoutingModel + ?Sized,
    C: TransitCost + 'static,
{
    if max_distance_per_vehicle < 0 {
        return Err(RoutingError::Configuration(format!(
            "maximum distance per vehicle must be non-negative, got {max_distance_per_vehicle}"
        )));
    }
    if global_span_coefficient < 0 {
        return Err(RoutingError::Configuration(format!(
            "global span coefficient must be non-negative, got {global_span_coefficient}"
        )));
    }
    if model.has_dimension(DISTANCE_DIMENSION) {
        return Err(RoutingError::Configuration(format!(
            "dimension '{DISTANCE_DIMENSION}' is already registered"
        )));
    }
    let nodes = model.index_manager().node_count();
    if metric.node_count() != nodes {
        return Err(RoutingError::Configuration(format!(
            "metric covers {} locations but the model has {nodes}",
            metric.node_count()
        )));
    }

    let transit: Arc<dyn TransitCost> = metric.clone();
    model.set_arc_cost_evaluator_of_all_vehicles(Arc::clone(&transit));
    model.add_dimension(
        transit,
        0,
        max_distance_per_vehicle,
        true,
        DISTANCE_DIMENSION,
    )?;

    let dimension = model.dimension_mut(DISTANCE_DIMENSION).ok_or_else(|| {
        RoutingError::Configuration(format!(
            "dimension '{DISTANCE_DIMENSION}' missing after registration"
        ))
    })?;
    dimension.set_global_span_cost_coefficient(global_span_coefficient);

    debug!(
        max_distance_per_vehicle,
        global_span_coefficient, "distance dimension configured"
    );
    Ok(())
}
