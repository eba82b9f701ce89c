//! Reading an assignment back into per-vehicle routes.

use std::fmt;

use serde::Serialize;

use crate::engine::{Assignment, RoutingModel};
use crate::error::{Result, RoutingError};
use crate::models::{Geography, VehicleRoute};

/// Per-vehicle routes plus the engine's objective value.
///
/// `Display` renders the line-oriented console format:
///
/// ```text
/// Objective: 1368
/// Route for Vehicle 0:
/// 0 -> 1 -> 2 -> 0
/// Distance of the route: 1368m
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    objective: i64,
    routes: Vec<VehicleRoute>,
}

impl Report {
    /// Objective value reported by the engine.
    pub fn objective(&self) -> i64 {
        self.objective
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    /// Longest single route.
    pub fn max_route_distance(&self) -> i64 {
        self.routes.iter().map(|r| r.distance()).max().unwrap_or(0)
    }

    /// Sum of all route distances.
    pub fn total_distance(&self) -> i64 {
        self.routes.iter().map(|r| r.distance()).sum()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective: {}", self.objective)?;
        for route in &self.routes {
            writeln!(f, "Route for Vehicle {}:", route.vehicle())?;
            let stops: Vec<String> = route.stops().iter().map(ToString::to_string).collect();
            writeln!(f, "{}", stops.join(" -> "))?;
            writeln!(f, "Distance of the route: {}m", route.distance())?;
        }
        Ok(())
    }
}

/// Walks every vehicle's route in `assignment` and collects stops and
/// distances.
///
/// Each route is followed from the vehicle's start index through the
/// assignment's successors until an end index, summing the model's arc cost
/// for that vehicle on every leg.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grid_routing::constraints::configure;
/// use grid_routing::distance::DistanceMatrix;
/// use grid_routing::engine::local::LocalEngine;
/// use grid_routing::engine::{RoutingEngine, SearchParameters};
/// use grid_routing::models::{Geography, ScaleFactor};
/// use grid_routing::report::render;
/// use grid_routing::search::solve;
///
/// let scale = ScaleFactor::new(114, 80).unwrap();
/// let geo = Geography::new(&[(5, 0), (2, 0), (8, 0)], scale, 1).unwrap();
/// let metric = Arc::new(DistanceMatrix::manhattan(&geo));
/// let mut model = LocalEngine.new_model(3, 1, 0).unwrap();
/// configure(&mut model, &metric, 10_000, 0).unwrap();
///
/// let outcome = solve(&model, &SearchParameters::default()).unwrap();
/// let report = render(&geo, &model, outcome.assignment().unwrap()).unwrap();
/// assert_eq!(report.routes()[0].distance(), 1368);
/// assert!(report.to_string().contains("Distance of the route: 1368m"));
/// ```
pub fn render<M>(geography: &Geography, model: &M, assignment: &Assignment) -> Result<Report>
where
    M: RoutingModel + ?Sized,
{
    let manager = model.index_manager();
    if manager.node_count() != geography.location_count()
        || manager.vehicle_count() != geography.vehicle_count()
    {
        return Err(RoutingError::Configuration(format!(
            "model has {} nodes and {} vehicles, geography has {} and {}",
            manager.node_count(),
            manager.vehicle_count(),
            geography.location_count(),
            geography.vehicle_count()
        )));
    }
    if assignment.len() != manager.num_indices() {
        return Err(RoutingError::MalformedAssignment(format!(
            "expected {} successors, got {}",
            manager.num_indices(),
            assignment.len()
        )));
    }

    let routes = (0..model.vehicle_count())
        .map(|vehicle| walk_route(model, assignment, vehicle))
        .collect::<Result<Vec<_>>>()?;

    Ok(Report {
        objective: assignment.objective_value(),
        routes,
    })
}

fn walk_route<M>(model: &M, assignment: &Assignment, vehicle: usize) -> Result<VehicleRoute>
where
    M: RoutingModel + ?Sized,
{
    let limit = model.index_manager().num_indices();
    let mut route = VehicleRoute::new(vehicle);
    let mut index = model.start(vehicle);
    route.push_stop(model.index_to_node(index));

    let mut steps = 0;
    while !model.is_end(index) {
        let next = assignment.next(index);
        if next >= limit || next == index {
            return Err(RoutingError::MalformedAssignment(format!(
                "vehicle {vehicle}: index {index} has no valid successor"
            )));
        }
        steps += 1;
        if steps > limit {
            return Err(RoutingError::MalformedAssignment(format!(
                "vehicle {vehicle}: route never reaches its end"
            )));
        }
        let cost = model.arc_cost_for_vehicle(index, next, vehicle);
        route.push_leg(model.index_to_node(next), cost);
        index = next;
    }

    Ok(route)
}
